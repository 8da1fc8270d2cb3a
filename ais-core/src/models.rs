use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Mmsi, Point, Sentence};

/// Type id reported for position messages that arrive without a `messageType`.
pub const DEFAULT_POSITION_MESSAGE_TYPE: u32 = 1;

/// Vessel related data that is emitted every 6th minute from vessels.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisStatic {
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    #[serde(rename = "messageType")]
    pub message_type: u32,
    pub mmsi: Mmsi,
    pub msgtime: DateTime<Utc>,
    #[serde(rename = "imoNumber")]
    pub imo_number: Option<i32>,
    #[serde(rename = "callSign")]
    pub call_sign: Option<String>,
    pub destination: Option<String>,
    pub eta: Option<String>,
    pub name: Option<String>,
    pub draught: Option<i32>,
    #[serde(rename = "shipLength")]
    pub ship_length: Option<i32>,
    #[serde(rename = "shipWidth")]
    pub ship_width: Option<i32>,
    #[serde(rename = "shipType")]
    pub ship_type: Option<i32>,
    #[serde(rename = "reportClass")]
    pub report_class: Option<String>,
}

/// Position data that is emitted every 6th second by vessels.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AisPosition {
    #[serde(rename = "messageType")]
    pub message_type: Option<u32>,
    #[serde(rename = "type")]
    pub type_name: Option<String>,
    pub mmsi: Mmsi,
    pub msgtime: DateTime<Utc>,
    #[serde(rename = "courseOverGround")]
    pub course_over_ground: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(rename = "navigationalStatus")]
    pub navigational_status: Option<i32>,
    #[serde(rename = "aisClass")]
    pub ais_class: Option<String>,
    #[serde(rename = "rateOfTurn")]
    pub rate_of_turn: Option<f64>,
    #[serde(rename = "speedOverGround")]
    pub speed_over_ground: Option<f64>,
    #[serde(rename = "trueHeading")]
    pub true_heading: Option<i32>,
}

#[derive(Debug, Clone)]
pub enum AisSentence {
    Position(AisPosition),
    Static(AisStatic),
}

impl Sentence for AisPosition {
    fn type_id(&self) -> u32 {
        self.message_type.unwrap_or(DEFAULT_POSITION_MESSAGE_TYPE)
    }

    fn mmsi(&self) -> Option<Mmsi> {
        Some(self.mmsi)
    }

    fn location(&self) -> Option<Point> {
        match (self.longitude, self.latitude) {
            (Some(longitude), Some(latitude)) => Some(Point::new(longitude, latitude)),
            _ => None,
        }
    }

    fn field(&self, _name: &str) -> Option<&str> {
        None
    }
}

impl Sentence for AisStatic {
    fn type_id(&self) -> u32 {
        self.message_type
    }

    fn mmsi(&self) -> Option<Mmsi> {
        Some(self.mmsi)
    }

    fn location(&self) -> Option<Point> {
        None
    }

    fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" => self.name.as_deref(),
            "destination" => self.destination.as_deref(),
            "call_sign" => self.call_sign.as_deref(),
            "report_class" => self.report_class.as_deref(),
            _ => None,
        }
    }
}

impl Sentence for AisSentence {
    fn type_id(&self) -> u32 {
        match self {
            AisSentence::Position(p) => p.type_id(),
            AisSentence::Static(s) => s.type_id(),
        }
    }

    fn mmsi(&self) -> Option<Mmsi> {
        match self {
            AisSentence::Position(p) => p.mmsi(),
            AisSentence::Static(s) => s.mmsi(),
        }
    }

    fn location(&self) -> Option<Point> {
        match self {
            AisSentence::Position(p) => p.location(),
            AisSentence::Static(s) => s.location(),
        }
    }

    fn field(&self, name: &str) -> Option<&str> {
        match self {
            AisSentence::Position(p) => p.field(name),
            AisSentence::Static(s) => s.field(name),
        }
    }
}

impl From<AisPosition> for AisSentence {
    fn from(value: AisPosition) -> Self {
        AisSentence::Position(value)
    }
}

impl From<AisStatic> for AisSentence {
    fn from(value: AisStatic) -> Self {
        AisSentence::Static(value)
    }
}

impl AisPosition {
    /// A type 1 position report at the given coordinates.
    pub fn new(mmsi: Mmsi, msgtime: DateTime<Utc>, longitude: f64, latitude: f64) -> Self {
        AisPosition {
            message_type: Some(DEFAULT_POSITION_MESSAGE_TYPE),
            type_name: Some("Position".to_string()),
            mmsi,
            msgtime,
            course_over_ground: None,
            latitude: Some(latitude),
            longitude: Some(longitude),
            navigational_status: None,
            ais_class: None,
            rate_of_turn: None,
            speed_over_ground: None,
            true_heading: None,
        }
    }
}

impl AisStatic {
    /// A voyage data message carrying only a name and a destination.
    pub fn new(
        mmsi: Mmsi,
        msgtime: DateTime<Utc>,
        name: Option<String>,
        destination: Option<String>,
    ) -> Self {
        AisStatic {
            type_name: Some("Staticdata".to_string()),
            message_type: crate::VOYAGE_DATA_MESSAGE_TYPE,
            mmsi,
            msgtime,
            imo_number: None,
            call_sign: None,
            destination,
            eta: None,
            name,
            draught: None,
            ship_length: None,
            ship_width: None,
            ship_type: None,
            report_class: None,
        }
    }
}
