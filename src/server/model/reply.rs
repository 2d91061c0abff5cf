use chrono::{DateTime, Utc};

/// Accent colour used for informational embeds.
pub const EMBED_COLOUR: u32 = 0x0099FF;

/// Content of a message the bot sends in response to a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Text(String),
    Embed(EmbedReply),
}

impl Reply {
    /// Plain text of the reply, `None` for embeds.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Embed(_) => None,
        }
    }
}

impl From<&str> for Reply {
    fn from(text: &str) -> Self {
        Reply::Text(text.to_string())
    }
}

impl From<String> for Reply {
    fn from(text: String) -> Self {
        Reply::Text(text)
    }
}

impl From<EmbedReply> for Reply {
    fn from(embed: EmbedReply) -> Self {
        Reply::Embed(embed)
    }
}

/// Field of an embed: name, value and whether it renders inline.
#[derive(Debug, Clone, PartialEq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// Gateway-agnostic embed description.
///
/// # Example
///
/// ```rust,ignore
/// let embed = EmbedReply::new("Bot Statistics")
///     .field("Servers", "12", true)
///     .colour(EMBED_COLOUR)
///     .timestamp(Utc::now());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmbedReply {
    pub title: String,
    pub description: Option<String>,
    pub fields: Vec<EmbedField>,
    pub colour: Option<u32>,
    pub thumbnail: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

impl EmbedReply {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn colour(mut self, colour: u32) -> Self {
        self.colour = Some(colour);
        self
    }

    pub fn thumbnail(mut self, url: Option<String>) -> Self {
        self.thumbnail = url;
        self
    }

    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Value of the first field named `name`.
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}
