use serde::Deserialize;

/// Symbolic names of the words that appear in a trace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Keyword {
    Clear,
    Pen,
    PenUp,
    PenDown,
    SetColor,
    Move,
}

/// Source of the (possibly localized) words written into a trace.
///
/// The interpreter treats every returned string as opaque.
pub trait Keywords {
    fn keyword(&self, key: Keyword) -> &str;
}

impl<K: Keywords + ?Sized> Keywords for &K {
    #[inline]
    fn keyword(&self, key: Keyword) -> &str {
        (**self).keyword(key)
    }
}

// ── KeywordTable ──────────────────────────────────────────────────────────

/// Stock keyword provider, loadable from JSON.
///
/// ```json
/// { "clear": "CLR", "pen": "PEN", "pen_up": "UP", "pen_down": "DOWN",
///   "set_color": "CO", "move": "MV" }
/// ```
///
/// Missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeywordTable {
    pub clear: String,
    pub pen: String,
    pub pen_up: String,
    pub pen_down: String,
    pub set_color: String,
    #[serde(rename = "move")]
    pub move_pen: String,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            clear: "CLR".to_string(),
            pen: "PEN".to_string(),
            pen_up: "UP".to_string(),
            pen_down: "DOWN".to_string(),
            set_color: "CO".to_string(),
            move_pen: "MV".to_string(),
        }
    }
}

impl KeywordTable {
    pub fn from_json(src: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(src)
    }
}

impl Keywords for KeywordTable {
    fn keyword(&self, key: Keyword) -> &str {
        match key {
            Keyword::Clear => &self.clear,
            Keyword::Pen => &self.pen,
            Keyword::PenUp => &self.pen_up,
            Keyword::PenDown => &self.pen_down,
            Keyword::SetColor => &self.set_color,
            Keyword::Move => &self.move_pen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let table = KeywordTable::default();
        assert_eq!(table.keyword(Keyword::Clear), "CLR");
        assert_eq!(table.keyword(Keyword::Move), "MV");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let table = KeywordTable::from_json(r#"{ "clear": "EFFACER", "move": "DEPL" }"#).unwrap();
        assert_eq!(table.keyword(Keyword::Clear), "EFFACER");
        assert_eq!(table.keyword(Keyword::Move), "DEPL");
        assert_eq!(table.keyword(Keyword::PenDown), "DOWN");
    }

    #[test]
    fn unknown_field_is_rejected() {
        assert!(KeywordTable::from_json(r#"{ "erase": "X" }"#).is_err());
    }
}
