//! Fulfillment messages.
//!
//! On the wire every message is one flat object whose integer `type` decides
//! which of the other fields mean anything. Here each kind is its own enum
//! variant carrying only its own fields.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::null_as_default;

/// Integer discriminant of a fulfillment message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Text,
    Card,
    QuickReply,
    Image,
    CustomPayload,
    /// A discriminant this client has no variant for.
    Unknown(i64),
}

impl MessageKind {
    pub fn code(&self) -> i64 {
        match self {
            Self::Text => 0,
            Self::Card => 1,
            Self::QuickReply => 2,
            Self::Image => 3,
            Self::CustomPayload => 4,
            Self::Unknown(code) => *code,
        }
    }

    pub fn from_code(code: i64) -> Self {
        match code {
            0 => Self::Text,
            1 => Self::Card,
            2 => Self::QuickReply,
            3 => Self::Image,
            4 => Self::CustomPayload,
            other => Self::Unknown(other),
        }
    }
}

/// Card button.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub postback: String,
}

/// A single fulfillment message. `platform` names the integration the
/// message targets and is `None` for the default platform.
///
/// A missing `type` reads as text. Types outside the known set decode to
/// [`Message::Unknown`], which keeps the original object and writes it back
/// unchanged.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Text {
        platform: Option<String>,
        speech: String,
    },
    Card {
        platform: Option<String>,
        title: Option<String>,
        subtitle: Option<String>,
        image_url: Option<String>,
        buttons: Vec<Button>,
    },
    QuickReply {
        platform: Option<String>,
        title: Option<String>,
        replies: Vec<String>,
    },
    Image {
        platform: Option<String>,
        image_url: String,
    },
    CustomPayload {
        platform: Option<String>,
        payload: serde_json::Value,
    },
    Unknown {
        kind: i64,
        platform: Option<String>,
        raw: serde_json::Value,
    },
}

impl Message {
    pub fn text(speech: impl Into<String>) -> Self {
        Message::Text {
            platform: None,
            speech: speech.into(),
        }
    }

    pub fn kind(&self) -> MessageKind {
        match self {
            Message::Text { .. } => MessageKind::Text,
            Message::Card { .. } => MessageKind::Card,
            Message::QuickReply { .. } => MessageKind::QuickReply,
            Message::Image { .. } => MessageKind::Image,
            Message::CustomPayload { .. } => MessageKind::CustomPayload,
            Message::Unknown { kind, .. } => MessageKind::Unknown(*kind),
        }
    }

    pub fn platform(&self) -> Option<&str> {
        match self {
            Message::Text { platform, .. }
            | Message::Card { platform, .. }
            | Message::QuickReply { platform, .. }
            | Message::Image { platform, .. }
            | Message::CustomPayload { platform, .. }
            | Message::Unknown { platform, .. } => platform.as_deref(),
        }
    }

    /// Speech text for text messages.
    pub fn speech(&self) -> Option<&str> {
        match self {
            Message::Text { speech, .. } => Some(speech),
            _ => None,
        }
    }

    fn from_wire(wire: WireMessage, raw: serde_json::Value) -> Self {
        let platform = wire.platform;
        match MessageKind::from_code(wire.kind) {
            MessageKind::Text => Message::Text {
                platform,
                speech: wire.speech.unwrap_or_default(),
            },
            MessageKind::Card => Message::Card {
                platform,
                title: wire.title,
                subtitle: wire.subtitle,
                image_url: wire.image_url,
                buttons: wire.buttons,
            },
            MessageKind::QuickReply => Message::QuickReply {
                platform,
                title: wire.title,
                replies: wire.replies,
            },
            MessageKind::Image => Message::Image {
                platform,
                image_url: wire.image_url.unwrap_or_default(),
            },
            MessageKind::CustomPayload => Message::CustomPayload {
                platform,
                payload: wire.payload.unwrap_or(serde_json::Value::Null),
            },
            MessageKind::Unknown(kind) => Message::Unknown {
                kind,
                platform,
                raw,
            },
        }
    }
}

impl<'de> Deserialize<'de> for Message {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let wire = WireMessage::deserialize(&raw).map_err(serde::de::Error::custom)?;
        Ok(Message::from_wire(wire, raw))
    }
}

impl Serialize for Message {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Message::Unknown { raw, .. } => raw.serialize(serializer),
            known => WireMessage::from(known).serialize(serializer),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireMessage {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subtitle: Option<String>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    buttons: Vec<Button>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    replies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payload: Option<serde_json::Value>,
}

impl From<&Message> for WireMessage {
    fn from(message: &Message) -> Self {
        let kind = message.kind().code();
        let platform = message.platform().map(str::to_string);
        match message {
            Message::Text { speech, .. } => WireMessage {
                kind,
                platform,
                speech: Some(speech.clone()),
                ..Default::default()
            },
            Message::Card {
                title,
                subtitle,
                image_url,
                buttons,
                ..
            } => WireMessage {
                kind,
                platform,
                title: title.clone(),
                subtitle: subtitle.clone(),
                image_url: image_url.clone(),
                buttons: buttons.clone(),
                ..Default::default()
            },
            Message::QuickReply { title, replies, .. } => WireMessage {
                kind,
                platform,
                title: title.clone(),
                replies: replies.clone(),
                ..Default::default()
            },
            Message::Image { image_url, .. } => WireMessage {
                kind,
                platform,
                image_url: Some(image_url.clone()),
                ..Default::default()
            },
            Message::CustomPayload { payload, .. } => WireMessage {
                kind,
                platform,
                payload: Some(payload.clone()),
                ..Default::default()
            },
            Message::Unknown { .. } => WireMessage {
                kind,
                platform,
                ..Default::default()
            },
        }
    }
}
