mod check_and_record_command;
mod check_and_record_use_case;

pub use check_and_record_command::CheckAndRecordCommand;
pub use check_and_record_use_case::CheckAndRecordUseCase;
