//! Points of interest returned by geocoding search.

use crate::models::GeoPoint;
use crate::spatial::{distance_km, format_distance_km};
use serde::{Deserialize, Serialize};

/// Structured address parts as returned by the geocoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressFields {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
}

/// A place address arrives either as a preformatted string or as parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlaceAddress {
    Raw(String),
    Structured(AddressFields),
}

impl PlaceAddress {
    /// Single display line: street + house, city, region, country.
    pub fn display(&self) -> String {
        match self {
            Self::Raw(text) => text.trim().to_string(),
            Self::Structured(fields) => {
                let street = match (&fields.street, &fields.house_number) {
                    (Some(street), Some(house)) => Some(format!("{street}, {house}")),
                    (Some(street), None) => Some(street.clone()),
                    _ => None,
                };
                [
                    street,
                    fields.city.clone(),
                    fields.region.clone(),
                    fields.country.clone(),
                ]
                .into_iter()
                .flatten()
                .map(|part| part.trim().to_string())
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(", ")
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    pub location: GeoPoint,
    #[serde(default)]
    pub address: Option<PlaceAddress>,
}

impl Place {
    /// Address line, falling back to the place name.
    pub fn display_address(&self) -> String {
        self.address
            .as_ref()
            .map(PlaceAddress::display)
            .filter(|line| !line.is_empty())
            .unwrap_or_else(|| self.name.clone())
    }

    pub fn distance_from(&self, origin: &GeoPoint) -> f64 {
        distance_km(origin, &self.location)
    }

    pub fn distance_label_from(&self, origin: &GeoPoint) -> String {
        format_distance_km(self.distance_from(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_and_structured_addresses_decode() {
        let raw: Place = serde_json::from_value(serde_json::json!({
            "name": "АЗС Лукойл",
            "location": { "lat": 56.0, "lon": 37.0 },
            "address": "  Ленинградское ш., 12  ",
        }))
        .unwrap();
        assert_eq!(raw.display_address(), "Ленинградское ш., 12");

        let structured: Place = serde_json::from_value(serde_json::json!({
            "name": "Стоянка",
            "location": { "latitude": 56.0, "longitude": 37.0 },
            "address": { "street": "Тверская", "houseNumber": "7", "city": "Москва", "country": "Россия" },
        }))
        .unwrap();
        assert_eq!(structured.display_address(), "Тверская, 7, Москва, Россия");
    }

    #[test]
    fn missing_address_falls_back_to_name() {
        let place = Place {
            name: "Кафе".to_string(),
            category: Some("food".to_string()),
            location: GeoPoint {
                latitude: 55.0,
                longitude: 37.0,
            },
            address: Some(PlaceAddress::Structured(AddressFields::default())),
        };
        assert_eq!(place.display_address(), "Кафе");
    }

    #[test]
    fn distance_label_from_origin() {
        let place = Place {
            name: "Точка".to_string(),
            category: None,
            location: GeoPoint {
                latitude: 1.0,
                longitude: 0.0,
            },
            address: None,
        };
        let origin = GeoPoint {
            latitude: 0.0,
            longitude: 0.0,
        };
        assert_eq!(place.distance_label_from(&origin), "111.2 км");
    }
}
