//! Conversion options.

/// Serialization variant.
///
/// The two variants differ in how much of the design tree reaches the
/// markup; pick one per conversion and never mix them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SerializationMode {
    /// Only resolved component instances produce tags. Icon controls carry
    /// their source as `src`.
    #[default]
    Compact,
    /// Text leaves become `Text` controls, tags carry an `id` derived from
    /// the node identifier and icon controls carry their source as `icon`.
    Annotated,
}

impl SerializationMode {
    /// Whether bare text leaves are emitted as text controls.
    pub fn emits_text_leaves(self) -> bool {
        matches!(self, Self::Annotated)
    }

    /// Whether tags carry an identity attribute.
    pub fn emits_identity(self) -> bool {
        matches!(self, Self::Annotated)
    }

    /// Attribute name for an icon control's source.
    pub fn icon_attribute(self) -> &'static str {
        match self {
            Self::Compact => "src",
            Self::Annotated => "icon",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Annotated => "annotated",
        }
    }
}

impl std::str::FromStr for SerializationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "annotated" => Ok(Self::Annotated),
            other => Err(format!("unknown serialization mode '{}'", other)),
        }
    }
}

/// Options for one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConversionOptions {
    pub mode: SerializationMode,
    /// Emit layout helper attributes (`class`, `width`, flex alignment).
    pub layout_hints: bool,
}

impl ConversionOptions {
    pub fn new(mode: SerializationMode) -> Self {
        Self {
            mode,
            layout_hints: false,
        }
    }

    pub fn annotated() -> Self {
        Self::new(SerializationMode::Annotated)
    }

    pub fn with_layout_hints(mut self, enabled: bool) -> Self {
        self.layout_hints = enabled;
        self
    }
}
