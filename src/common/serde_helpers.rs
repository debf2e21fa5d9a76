// src/common/serde_helpers.rs

use serde::{
    de::{value::StringDeserializer, DeserializeOwned, IntoDeserializer},
    Deserialize, Deserializer,
};

// Status enums are SCREAMING_SNAKE_CASE on the wire, but clients may send
// `completed` or `Paid`; upper-case before matching the variant.
fn parse_upper<T, E>(raw: String) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    let upper: StringDeserializer<E> = raw.trim().to_uppercase().into_deserializer();
    T::deserialize(upper)
}

pub fn any_case<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    parse_upper(String::deserialize(deserializer)?)
}

pub fn any_case_opt<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Option::<String>::deserialize(deserializer)?
        .map(parse_upper::<T, D::Error>)
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{finance::PaymentStatus, trip::TripStatus};

    #[derive(Deserialize)]
    struct StatusFields {
        #[serde(deserialize_with = "any_case")]
        trip: TripStatus,
        #[serde(default, deserialize_with = "any_case_opt")]
        payment: Option<PaymentStatus>,
    }

    #[test]
    fn status_names_ignore_case() {
        let parsed: StatusFields =
            serde_json::from_str(r#"{"trip":"in_progress","payment":"Paid"}"#).unwrap();
        assert_eq!(parsed.trip, TripStatus::InProgress);
        assert_eq!(parsed.payment, Some(PaymentStatus::Paid));
    }

    #[test]
    fn missing_or_null_optional_status_is_none() {
        let parsed: StatusFields = serde_json::from_str(r#"{"trip":"COMPLETED"}"#).unwrap();
        assert_eq!(parsed.payment, None);
        let parsed: StatusFields = serde_json::from_str(r#"{"trip":"COMPLETED","payment":null}"#).unwrap();
        assert_eq!(parsed.payment, None);
    }

    #[test]
    fn unknown_status_is_still_an_error() {
        assert!(serde_json::from_str::<StatusFields>(r#"{"trip":"teleported"}"#).is_err());
    }
}
