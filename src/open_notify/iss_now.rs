use serde::Deserialize;

// API: http://open-notify.org/Open-Notify-API/ISS-Location-Now/
#[derive(Debug, Deserialize)]
pub struct IssNowGet {
    pub message: Option<String>,
    pub timestamp: Option<i64>, // Unix seconds
    pub iss_position: IssPositionGet,
}

/// Coordinates arrive as strings, e.g. `"-12.3456"`.
#[derive(Debug, Deserialize)]
pub struct IssPositionGet {
    pub latitude: String,
    pub longitude: String,
}
