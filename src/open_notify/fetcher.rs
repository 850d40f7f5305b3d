use crate::app_config::AppConfig;
use crate::domain::{GeoLocation, GeoLocationError, IssPosition};
use crate::open_notify::iss_now::IssNowGet;
use chrono::DateTime;
use reqwest::Client;
use std::num::ParseFloatError;
use thiserror::Error;
use tracing::{info, instrument};

const SUCCESS: &str = "success";

#[instrument(skip(client, config))]
pub async fn fetch_position(client: &Client, config: &AppConfig) -> Result<IssPosition, PositionError> {
    info!("🛰️ Retrieving ISS position...");

    let response = client.get(config.iss().url()).send().await?.error_for_status()?;
    let iss_now = response.json::<IssNowGet>().await?;
    let position = map_position(iss_now)?;

    info!(
        latitude = position.location.latitude,
        longitude = position.location.longitude,
        timestamp = ?position.timestamp,
        "🛰️ Retrieving ISS position... OK"
    );
    Ok(position)
}

fn map_position(iss_now: IssNowGet) -> Result<IssPosition, PositionError> {
    if let Some(message) = iss_now.message.filter(|message| message != SUCCESS) {
        return Err(PositionError::Unsuccessful { message });
    }

    let latitude = parse_coordinate("latitude", &iss_now.iss_position.latitude)?;
    let longitude = parse_coordinate("longitude", &iss_now.iss_position.longitude)?;
    let timestamp = iss_now
        .timestamp
        .map(|seconds| DateTime::from_timestamp(seconds, 0).ok_or(PositionError::InvalidTimestamp(seconds)))
        .transpose()?;

    Ok(IssPosition {
        location: GeoLocation::new(latitude, longitude)?,
        timestamp,
    })
}

fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, PositionError> {
    value.trim().parse::<f64>().map_err(|source| PositionError::InvalidCoordinate {
        field,
        value: value.to_string(),
        source,
    })
}

#[derive(Error, Debug)]
pub enum PositionError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("ISS position service reported '{message}'")]
    Unsuccessful { message: String },
    #[error("invalid ISS {field} '{value}': {source}")]
    InvalidCoordinate {
        field: &'static str,
        value: String,
        source: ParseFloatError,
    },
    #[error("invalid ISS timestamp {0}")]
    InvalidTimestamp(i64),
    #[error(transparent)]
    Location(#[from] GeoLocationError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;
    use test_log::test;

    async fn fetch_from(status: usize, body: &str) -> Result<IssPosition, PositionError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/iss-now.json")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().iss_url(format!("{}/iss-now.json", server.url())).build();
        let result = fetch_position(&Client::new(), &config).await;

        mock.assert_async().await;
        result
    }

    #[test(tokio::test)]
    async fn fetch_position_returns_the_parsed_position() -> Result<(), PositionError> {
        let position = fetch_from(200, include_str!("../../tests/resources/iss_now_response.json")).await?;

        assert_eq!(
            position,
            IssPosition {
                location: GeoLocation {
                    latitude: -12.3456,
                    longitude: 78.9012,
                },
                timestamp: Some(Utc.with_ymd_and_hms(2023, 10, 17, 7, 23, 0).unwrap()),
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_position_only_needs_the_coordinates() -> Result<(), PositionError> {
        let position = fetch_from(200, r#"{"iss_position": {"latitude": "10.5", "longitude": "20.25"}}"#).await?;

        assert_eq!(
            position,
            IssPosition {
                location: GeoLocation {
                    latitude: 10.5,
                    longitude: 20.25,
                },
                timestamp: None,
            }
        );

        Ok(())
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_on_a_server_error() {
        let result = fetch_from(500, "").await;

        match result {
            Err(PositionError::Request(err)) => assert_eq!(err.status(), Some(reqwest::StatusCode::INTERNAL_SERVER_ERROR)),
            other => panic!("Expected a request error, found {:?}", other),
        }
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_on_a_missing_position() {
        let result = fetch_from(200, r#"{ "message": "success", "timestamp": 1697527380 }"#).await;

        assert!(matches!(result, Err(PositionError::Request(_))), "found {:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_on_a_timestamp_out_of_range() {
        let body = r#"{ "timestamp": 9223372036854775807, "iss_position": { "latitude": "0", "longitude": "0" } }"#;
        let result = fetch_from(200, body).await;

        assert!(matches!(result, Err(PositionError::InvalidTimestamp(_))), "found {:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_on_a_position_without_latitude() {
        let result = fetch_from(200, r#"{ "iss_position": { "longitude": "20.25" } }"#).await;

        assert!(matches!(result, Err(PositionError::Request(_))), "found {:?}", result);
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_on_a_malformed_coordinate() {
        let body = r#"{ "message": "success", "timestamp": 1697527380, "iss_position": { "latitude": "north", "longitude": "1.0" } }"#;
        let result = fetch_from(200, body).await;

        match result {
            Err(PositionError::InvalidCoordinate { field, value, .. }) => {
                assert_eq!(field, "latitude");
                assert_eq!(value, "north");
            }
            other => panic!("Expected an invalid coordinate, found {:?}", other),
        }
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_on_a_coordinate_off_the_globe() {
        let body = r#"{ "message": "success", "timestamp": 1697527380, "iss_position": { "latitude": "12.0", "longitude": "200.0" } }"#;
        let result = fetch_from(200, body).await;

        assert!(
            matches!(result, Err(PositionError::Location(GeoLocationError::InvalidLongitude(_)))),
            "found {:?}",
            result
        );
    }

    #[test(tokio::test)]
    async fn fetch_position_fails_when_the_service_reports_failure() {
        let body = r#"{ "message": "failure", "timestamp": 1697527380, "iss_position": { "latitude": "0", "longitude": "0" } }"#;
        let result = fetch_from(200, body).await;

        match result {
            Err(PositionError::Unsuccessful { message }) => assert_eq!(message, "failure"),
            other => panic!("Expected an unsuccessful response, found {:?}", other),
        }
    }

    #[test]
    fn parse_coordinate_tolerates_surrounding_whitespace() {
        assert_eq!(parse_coordinate("latitude", " 51.5 ").unwrap(), 51.5);
    }
}
