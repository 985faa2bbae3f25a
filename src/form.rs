#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Code,
    Score,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Code,
            FormField::Code => FormField::Score,
            FormField::Score => FormField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Score,
            FormField::Code => FormField::Name,
            FormField::Score => FormField::Code,
        }
    }
}

/// Committed draft handed to the store on a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub code: String,
    pub score: i64,
}

/// "Add team" draft. Kept apart from the store until submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamDraft {
    pub name: String,
    pub code: String,
    pub score: String,
    pub field: FormField,
}

impl TeamDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn focus_prev(&mut self) {
        self.field = self.field.prev();
    }

    pub fn push_char(&mut self, ch: char) {
        match self.field {
            FormField::Name => self.name.push(ch),
            FormField::Code => self.code.push(ch),
            FormField::Score => {
                if ch.is_ascii_digit() || (ch == '-' && self.score.is_empty()) {
                    self.score.push(ch);
                }
            }
        }
    }

    pub fn backspace(&mut self) {
        match self.field {
            FormField::Name => self.name.pop(),
            FormField::Code => self.code.pop(),
            FormField::Score => self.score.pop(),
        };
    }

    pub fn score_value(&self) -> i64 {
        parse_score(&self.score)
    }

    /// Hands back the draft and resets the form, or leaves everything as is
    /// when the name or code is still empty.
    pub fn submit(&mut self) -> Option<NewTeam> {
        if self.name.is_empty() || self.code.is_empty() {
            return None;
        }
        let team = NewTeam {
            name: std::mem::take(&mut self.name),
            code: std::mem::take(&mut self.code),
            score: parse_score(&self.score),
        };
        *self = Self::new();
        Some(team)
    }
}

fn parse_score(raw: &str) -> i64 {
    raw.trim().parse::<i64>().unwrap_or(0)
}
