/// Sentinel shown for any display field the catalogue leaves out
pub const UNKNOWN: &str = "Unknown";

/// RawComponent - a catalogue entry exactly as the source supplied it
///
/// Every field may be missing. Nested `components` are only consulted when the
/// catalogue carries no dependency edges.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawComponent {
    pub id: Option<String>,
    pub name: Option<String>,
    pub version: Option<String>,
    pub component_type: Option<String>,
    pub scope: Option<String>,
    pub components: Vec<RawComponent>,
}

impl RawComponent {
    pub fn new(id: Option<&str>, name: Option<&str>) -> Self {
        Self {
            id: id.map(str::to_string),
            name: name.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_type(mut self, component_type: &str) -> Self {
        self.component_type = Some(component_type.to_string());
        self
    }

    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }

    pub fn with_components(mut self, components: Vec<RawComponent>) -> Self {
        self.components = components;
        self
    }
}

/// Identity used when deciding whether two records denote the same component
///
/// The id when the record has one, the name otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComponentIdentity {
    Id(String),
    Name(String),
}

/// ComponentRecord value object - a normalized catalogue entry
///
/// Display fields are never absent: anything missing from the raw record is
/// replaced by [`UNKNOWN`] once, in [`ComponentRecord::from_raw`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentRecord {
    id: Option<String>,
    name: String,
    version: String,
    component_type: String,
    scope: String,
}

impl ComponentRecord {
    pub fn from_raw(raw: &RawComponent) -> Self {
        fn or_unknown(value: &Option<String>) -> String {
            value.clone().unwrap_or_else(|| UNKNOWN.to_string())
        }

        Self {
            id: raw.id.clone(),
            name: or_unknown(&raw.name),
            version: or_unknown(&raw.version),
            component_type: or_unknown(&raw.component_type),
            scope: or_unknown(&raw.scope),
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn component_type(&self) -> &str {
        &self.component_type
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn identity(&self) -> ComponentIdentity {
        match &self.id {
            Some(id) => ComponentIdentity::Id(id.clone()),
            None => ComponentIdentity::Name(self.name.clone()),
        }
    }

    /// Key used for case-insensitive ordering by name
    pub fn sort_key(&self) -> String {
        self.name.to_lowercase()
    }
}
