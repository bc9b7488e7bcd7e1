// crates/search/src/domain/value_objects/resolved_location.rs

use serde::Serialize;
use serde_json::Value;
use shared_kernel::domain::value_objects::GeoPoint;

/// Localisation d'un profil telle qu'exploitée par la recherche.
///
/// La colonne stockée contient soit un texte libre (anciens profils), soit un
/// objet JSON `{"address": ..., "latitude": ..., "longitude": ...}`.
/// Seule l'adresse participe au matching ; les coordonnées sont conservées pour l'affichage.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResolvedLocation {
    address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    coordinates: Option<GeoPoint>,
}

impl ResolvedLocation {
    /// Tente d'abord la forme structurée, sinon reprend la valeur brute comme adresse.
    /// Valeur absente -> adresse vide.
    pub fn resolve(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        Self::parse_structured(raw).unwrap_or_else(|| Self::from_address(raw))
    }

    pub fn from_address(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            coordinates: None,
        }
    }

    pub fn with_coordinates(mut self, point: GeoPoint) -> Self {
        self.coordinates = Some(point);
        self
    }

    fn parse_structured(raw: &str) -> Option<Self> {
        if !raw.trim_start().starts_with('{') {
            return None;
        }

        let value: Value = serde_json::from_str(raw).ok()?;
        let object = value.as_object()?;
        let address = object.get("address")?.as_str()?;

        // Coordonnées optionnelles : ignorées si non numériques ou hors bornes
        let coordinates = match (
            object.get("latitude").and_then(Value::as_f64),
            object.get("longitude").and_then(Value::as_f64),
        ) {
            (Some(lat), Some(lon)) => GeoPoint::try_new(lat, lon).ok(),
            _ => None,
        };

        Some(Self {
            address: address.to_string(),
            coordinates,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn coordinates(&self) -> Option<&GeoPoint> {
        self.coordinates.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.address.is_empty()
    }

    /// `needle` doit déjà être en minuscules
    pub fn contains_normalized(&self, needle: &str) -> bool {
        self.address.to_lowercase().contains(needle)
    }
}
