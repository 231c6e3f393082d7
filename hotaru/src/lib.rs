use compact_str::CompactString;
use hotaru_common::{AccessoryValue, BulbPayload};
use serde::Deserialize;

use self::properties::Property;

pub mod log;
pub mod properties;

pub use hotaru_common as common;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("serde json error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("unknown property: {0}")]
    UnknownProperty(CompactString),
    #[error("unexpected value for {property}: expected {expected}")]
    UnexpectedValue {
        property: Property,
        expected: &'static str,
    },
}

/// Per-accessory configuration handed to [`BulbCodec::init`].
#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Accessory name, used as log context
    pub name: CompactString,
}

/// Context the host provides alongside a passthrough message.
#[derive(Debug, Clone, Default)]
pub struct MessageContext {
    pub topic: CompactString,
    pub property: Option<CompactString>,
}

/// Stateless value codec for one bulb accessory.
///
/// Holds nothing but its name and a log span; every conversion is a pure
/// function of its arguments, so one codec can serve any number of host
/// tasks concurrently.
pub struct BulbCodec {
    name: CompactString,
    span: tracing::Span,
}

impl BulbCodec {
    pub fn init(config: CodecConfig) -> Self {
        let span = tracing::info_span!("codec", accessory = %config.name);
        span.in_scope(|| tracing::info!("Initializing codec for '{}'", config.name));

        BulbCodec { name: config.name, span }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pass an outgoing message through unchanged, recording its context.
    ///
    /// `output` is called synchronously, exactly once.
    pub fn encode(&self, message: &str, context: &MessageContext, output: impl FnOnce(&str)) {
        let _guard = self.span.enter();
        tracing::debug!(?context.property, "Encoding message on '{}': {message}", context.topic);

        output(message);
    }

    /// Pass an incoming message through unchanged, recording its context.
    ///
    /// `output` is called synchronously, exactly once.
    pub fn decode(&self, message: &str, context: &MessageContext, output: impl FnOnce(&str)) {
        let _guard = self.span.enter();
        tracing::debug!(?context.property, "Decoding message on '{}': {message}", context.topic);

        output(message);
    }

    /// Encode one property value into a bulb payload, serialized as JSON.
    pub fn encode_property(&self, property: Property, value: &AccessoryValue) -> Result<String> {
        let _guard = self.span.enter();
        tracing::debug!("Encoding {property} value: {value:?}");

        let payload = properties::encode(property, value)?;
        Ok(serde_json::to_string(&payload)?)
    }

    /// Decode one property from a bulb JSON payload.
    ///
    /// `Ok(None)` means the payload carries no update for this property.
    pub fn decode_property(
        &self,
        property: Property,
        message: &str,
    ) -> Result<Option<AccessoryValue>> {
        let _guard = self.span.enter();
        tracing::debug!("Decoding {property} from: {message}");

        let payload: BulbPayload = serde_json::from_str(message)?;
        Ok(properties::decode(property, &payload))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn codec() -> BulbCodec {
        BulbCodec::init(CodecConfig { name: "office lamp".into() })
    }

    #[test]
    fn encode_on() {
        let encoded = codec()
            .encode_property(Property::On, &AccessoryValue::Boolean(true))
            .unwrap();

        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&encoded).unwrap(),
            json!({ "state": "ON" })
        );
    }

    #[test]
    fn encode_rejects_mismatched_value() {
        assert!(matches!(
            codec().encode_property(Property::On, &AccessoryValue::Number(1.0)),
            Err(Error::UnexpectedValue { property: Property::On, .. })
        ));
    }

    #[test]
    fn decode_updates() {
        let codec = codec();

        assert_eq!(
            codec.decode_property(Property::On, r#"{"state":"OFF"}"#).unwrap(),
            Some(AccessoryValue::Boolean(false))
        );

        assert_eq!(
            codec
                .decode_property(Property::Brightness, r#"{"brightness":127}"#)
                .unwrap(),
            Some(AccessoryValue::Number(50.0))
        );

        assert_eq!(codec.decode_property(Property::Brightness, "{}").unwrap(), None);

        // explicit nulls mean no update, same as absent fields
        assert_eq!(codec.decode_property(Property::On, r#"{"state":null}"#).unwrap(), None);
        assert_eq!(
            codec
                .decode_property(Property::Brightness, r#"{"brightness":null}"#)
                .unwrap(),
            None
        );
        assert_eq!(codec.decode_property(Property::Rgb, r#"{"color":null}"#).unwrap(), None);
    }

    #[test]
    fn decode_rejects_malformed_json() {
        assert!(matches!(
            codec().decode_property(Property::On, "{not json"),
            Err(Error::SerdeJson(_))
        ));
    }

    #[test]
    fn passthrough_forwards_unchanged() {
        let codec = codec();
        let context = MessageContext {
            topic: "zigbee2mqtt/office_lamp".into(),
            property: Some("on".into()),
        };

        let mut seen = None;
        codec.encode(r#"{"state":"ON"}"#, &context, |message| seen = Some(message.to_owned()));
        assert_eq!(seen.as_deref(), Some(r#"{"state":"ON"}"#));

        let mut seen = None;
        codec.decode(r#"{"state":"ON"}"#, &context, |message| seen = Some(message.to_owned()));
        assert_eq!(seen.as_deref(), Some(r#"{"state":"ON"}"#));
    }

    #[test]
    fn config_from_json() {
        let config: CodecConfig = serde_json::from_value(json!({ "name": "bedroom" })).unwrap();
        assert_eq!(config.name, "bedroom");

        let codec = BulbCodec::init(config);
        assert_eq!(codec.name(), "bedroom");
    }
}
