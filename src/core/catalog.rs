use crate::domain::model::Villa;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{
    validate_date_order, validate_non_empty_string, validate_positive_number, validate_url,
    Validate,
};
use chrono::NaiveDate;
use std::collections::HashSet;

impl Validate for Villa {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("villas.name", &self.name)?;
        validate_positive_number(&format!("{}.max_guests", self.name), self.max_guests, 1)?;
        validate_date_order(
            &format!("{}.availability", self.name),
            self.available_from,
            self.available_until,
        )?;
        validate_url(&format!("{}.url", self.name), &self.url)?;
        Ok(())
    }
}

/// Fixed, ordered set of villas. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VillaCatalog {
    villas: Vec<Villa>,
}

impl VillaCatalog {
    pub fn new(villas: Vec<Villa>) -> Result<Self> {
        if villas.is_empty() {
            return Err(TrackerError::MissingConfigError {
                field: "villas".to_string(),
            });
        }

        let mut seen = HashSet::new();
        for villa in &villas {
            villa.validate()?;
            if !seen.insert(villa.name.as_str()) {
                return Err(TrackerError::InvalidConfigValueError {
                    field: "villas.name".to_string(),
                    value: villa.name.clone(),
                    reason: "Villa names must be unique".to_string(),
                });
            }
        }

        tracing::debug!("Villa catalog loaded with {} villas", villas.len());
        Ok(Self { villas })
    }

    /// 2025 年夏季的兩棟別墅
    pub fn estate_2025() -> Self {
        Self {
            villas: vec![
                Villa {
                    name: "Villa Carina".to_string(),
                    location: "Island of Ischia, Campania".to_string(),
                    available_from: date(2025, 6, 29),
                    available_until: date(2025, 7, 11),
                    max_guests: 12,
                    url: "https://emmavillas.com/en/Campania/villa-carina-12".to_string(),
                    details: "Private pool, sea views, Wi-Fi, A/C, private chef optional"
                        .to_string(),
                },
                Villa {
                    name: "Casolare San Martino".to_string(),
                    location: "Val di Cecina, Tuscany".to_string(),
                    available_from: date(2025, 7, 11),
                    available_until: date(2025, 7, 25),
                    max_guests: 16,
                    url: "https://emmavillas.com/en/Tuscany/casolare-san-martino-16-1"
                        .to_string(),
                    details:
                        "Scenic location, private pool, daily cleaning, Wi-Fi, A/C, chef optional"
                            .to_string(),
                },
            ],
        }
    }

    pub fn list(&self) -> &[Villa] {
        &self.villas
    }

    pub fn lookup(&self, name: &str) -> Option<&Villa> {
        self.villas.iter().find(|v| v.name == name)
    }

    pub fn len(&self) -> usize {
        self.villas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.villas.is_empty()
    }
}

impl Default for VillaCatalog {
    fn default() -> Self {
        Self::estate_2025()
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("built-in villa dates are valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estate_catalog_order_and_lookup() {
        let catalog = VillaCatalog::estate_2025();
        let names: Vec<&str> = catalog.list().iter().map(|v| v.name.as_str()).collect();
        assert_eq!(names, ["Villa Carina", "Casolare San Martino"]);

        let carina = catalog.lookup("Villa Carina").unwrap();
        assert_eq!(carina.max_guests, 12);
        assert_eq!(carina.availability_label(), "June 29 – July 11, 2025");

        let casolare = catalog.lookup("Casolare San Martino").unwrap();
        assert_eq!(casolare.max_guests, 16);
        assert_eq!(casolare.availability_label(), "July 11 – July 25, 2025");

        assert!(catalog.lookup("Villa Nowhere").is_none());
        assert!(catalog.lookup("villa carina").is_none());
    }

    #[test]
    fn test_built_in_villas_pass_validation() {
        let catalog = VillaCatalog::estate_2025();
        let rebuilt = VillaCatalog::new(catalog.list().to_vec()).unwrap();
        assert_eq!(rebuilt, catalog);
    }

    #[test]
    fn test_rejects_duplicate_names() {
        let carina = VillaCatalog::estate_2025().list()[0].clone();
        let err = VillaCatalog::new(vec![carina.clone(), carina]).unwrap_err();
        assert!(matches!(err, TrackerError::InvalidConfigValueError { .. }));
    }

    #[test]
    fn test_rejects_invalid_villa() {
        let mut villa = VillaCatalog::estate_2025().list()[0].clone();
        villa.max_guests = 0;
        assert!(VillaCatalog::new(vec![villa]).is_err());

        let mut villa = VillaCatalog::estate_2025().list()[0].clone();
        std::mem::swap(&mut villa.available_from, &mut villa.available_until);
        assert!(VillaCatalog::new(vec![villa]).is_err());

        assert!(matches!(
            VillaCatalog::new(vec![]),
            Err(TrackerError::MissingConfigError { .. })
        ));
    }
}
