use ais_core::{AisPosition, AisSentence, AisStatic};
use futures::StreamExt;
use serde::Deserialize;
use snafu::ResultExt;
use tokio::io::AsyncRead;
use tokio_util::{
    bytes::BytesMut,
    codec::{Decoder, FramedRead, LinesCodec, LinesCodecError},
};
use tracing::{Level, event};

use crate::error::{
    AisMessageError,
    ais_message_error::{DeserializeSnafu, InvalidMessageTypeSnafu},
};

/// The AIS message types we support.
enum SupportedMessageTypes {
    /// A message containing position data.
    Position,
    /// A message containing vessel related data.
    Static,
}

/// Convenience struct to deserialize the message type prior to attempting to deserialize the full
/// message.
#[derive(Deserialize)]
struct MessageType {
    /// What type of message this is.
    #[serde(rename = "messageType")]
    message_type: Option<u32>,
}

impl TryFrom<u32> for SupportedMessageTypes {
    type Error = AisMessageError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            1 | 2 | 3 | 27 => Ok(SupportedMessageTypes::Position),
            5 | 18 | 19 | 24 => Ok(SupportedMessageTypes::Static),
            _ => InvalidMessageTypeSnafu {
                message_type: value,
            }
            .fail(),
        }
    }
}

/// A line of input, or the reason it was rejected by the codec.
type DecodedLine = Result<String, LinesCodecError>;

/// [`LinesCodec`] that yields rejected lines (too long, invalid utf-8) as items.
///
/// [`FramedRead`] ends the stream after the first decoder error, so failures are moved into the
/// item instead. Only errors from the underlying reader end the stream.
struct SkippingLinesCodec(LinesCodec);

impl Decoder for SkippingLinesCodec {
    type Item = DecodedLine;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<DecodedLine>, LinesCodecError> {
        Ok(transpose_rejected(self.0.decode(buf)))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<DecodedLine>, LinesCodecError> {
        Ok(transpose_rejected(self.0.decode_eof(buf)))
    }
}

// `LinesCodec` consumes (or starts discarding) the offending line before failing, so decoding
// can resume with the next one.
fn transpose_rejected(result: Result<Option<String>, LinesCodecError>) -> Option<DecodedLine> {
    match result {
        Ok(line) => line.map(Ok),
        Err(e) => Some(Err(e)),
    }
}

/// Lazily decodes newline delimited json AIS messages from a reader.
///
/// Lines that fail to decode are logged and skipped. A read error ends the source.
pub struct SentenceSource<R> {
    lines: FramedRead<R, SkippingLinesCodec>,
    num_lines: u64,
    num_skipped: u64,
}

impl<R: AsyncRead + Unpin> SentenceSource<R> {
    pub fn new(reader: R, max_line_length: usize) -> Self {
        Self {
            lines: FramedRead::new(
                reader,
                SkippingLinesCodec(LinesCodec::new_with_max_length(max_line_length)),
            ),
            num_lines: 0,
            num_skipped: 0,
        }
    }

    pub async fn next(&mut self) -> Option<AisSentence> {
        loop {
            let line = match self.lines.next().await? {
                Ok(line) => line,
                Err(e) => {
                    event!(Level::ERROR, "failed to read ais messages: {:?}", e);
                    return None;
                }
            };
            self.num_lines += 1;

            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    event!(Level::ERROR, "skipping unreadable line: {:?}", e);
                    self.num_skipped += 1;
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }

            match parse_message(&line) {
                Ok(sentence) => return Some(sentence),
                Err(e) => {
                    event!(Level::ERROR, "{:?}", e);
                    self.num_skipped += 1;
                }
            }
        }
    }

    pub fn num_lines(&self) -> u64 {
        self.num_lines
    }

    pub fn num_skipped(&self) -> u64 {
        self.num_skipped
    }
}

pub fn parse_message(message: &str) -> Result<AisSentence, AisMessageError> {
    let message_type: MessageType = serde_json::from_str(message).context(DeserializeSnafu)?;

    // The stream only omits `messageType` on position reports.
    let supported = match message_type.message_type {
        Some(t) => SupportedMessageTypes::try_from(t)?,
        None => SupportedMessageTypes::Position,
    };

    match supported {
        SupportedMessageTypes::Position => {
            let val: AisPosition = serde_json::from_str(message).context(DeserializeSnafu)?;
            Ok(AisSentence::Position(val))
        }
        SupportedMessageTypes::Static => {
            let val: AisStatic = serde_json::from_str(message).context(DeserializeSnafu)?;
            Ok(AisSentence::Static(val))
        }
    }
}
