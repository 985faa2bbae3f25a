#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub code: String,
    pub score: i64,
}

/// Store mutation, applied through [`apply_action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add {
        name: String,
        code: String,
        score: i64,
    },
    Delete(TeamId),
    SetScore {
        id: TeamId,
        score: i64,
    },
    Increment(TeamId),
    Decrement(TeamId),
}

/// In-memory team collection. Every mutation consumes the current snapshot
/// and returns the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamStore {
    teams: Vec<Team>,
    // Monotonic, so ids are never handed out twice even after deletes.
    next_id: u64,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn get(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Id the next successful [`TeamStore::add`] will assign.
    pub fn peek_next_id(&self) -> TeamId {
        TeamId(self.next_id)
    }

    pub fn add(mut self, name: &str, code: &str, score: i64) -> Self {
        if name.is_empty() || code.is_empty() {
            return self;
        }
        let id = TeamId(self.next_id);
        self.next_id += 1;
        self.teams.push(Team {
            id,
            name: name.to_string(),
            code: code.to_string(),
            score,
        });
        self
    }

    pub fn delete(mut self, id: TeamId) -> Self {
        self.teams.retain(|t| t.id != id);
        self
    }

    pub fn update_score(mut self, id: TeamId, new_score: i64) -> Self {
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == id) {
            team.score = new_score.max(0);
        }
        self
    }

    /// Adds one point. No zero floor here: only downward updates clamp.
    pub fn increment(mut self, id: TeamId) -> Self {
        if let Some(team) = self.teams.iter_mut().find(|t| t.id == id) {
            team.score = team.score.saturating_add(1);
        }
        self
    }

    pub fn decrement(self, id: TeamId) -> Self {
        let Some(score) = self.get(id).map(|t| t.score) else {
            return self;
        };
        self.update_score(id, score.saturating_sub(1))
    }
}

pub fn apply_action(store: TeamStore, action: Action) -> TeamStore {
    match action {
        Action::Add { name, code, score } => store.add(&name, &code, score),
        Action::Delete(id) => store.delete(id),
        Action::SetScore { id, score } => store.update_score(id, score),
        Action::Increment(id) => store.increment(id),
        Action::Decrement(id) => store.decrement(id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_not_reused_after_delete() {
        let store = TeamStore::new().add("A", "AAA", 1);
        let first = store.teams()[0].id;
        let store = store.delete(first).add("B", "BBB", 1);
        assert_ne!(store.teams()[0].id, first);
    }

    #[test]
    fn apply_increment_keeps_negative_score_unclamped() {
        let store = TeamStore::new().add("A", "AAA", -2);
        let id = store.teams()[0].id;
        let store = apply_action(store, Action::Increment(id));
        assert_eq!(store.get(id).map(|t| t.score), Some(-1));
    }

    #[test]
    fn negative_score_is_allowed_at_creation() {
        let store = TeamStore::new().add("A", "AAA", -4);
        assert_eq!(store.teams()[0].score, -4);
    }
}
