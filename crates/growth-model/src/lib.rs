pub mod age;
pub mod enums;
pub mod error;
pub mod gestation;

pub use age::CalendarAge;
pub use enums::{MeasurementMethod, Reference, Sex};
pub use error::{GrowthError, Result};
pub use gestation::{Gestation, TERM_DAYS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_age_serializes() {
        let age = CalendarAge::new(1, 2, 3);
        let json = serde_json::to_string(&age).expect("serialize calendar age");
        let round: CalendarAge = serde_json::from_str(&json).expect("deserialize calendar age");
        assert_eq!(round, age);
    }

    #[test]
    fn enums_serialize_with_serde() {
        let json = serde_json::to_string(&Sex::Female).expect("serialize sex");
        let round: Sex = serde_json::from_str(&json).expect("deserialize sex");
        assert_eq!(round, Sex::Female);
    }

    #[test]
    fn unavailable_error_names_the_combination() {
        let error = GrowthError::ReferenceDataUnavailable {
            reference: Reference::TurnersSyndrome,
            method: MeasurementMethod::Weight,
            sex: Sex::Male,
            age: 4.0,
        };
        let message = error.to_string();
        assert!(message.contains("turners-syndrome"));
        assert!(message.contains("weight"));
        assert!(message.contains("male"));
    }
}
