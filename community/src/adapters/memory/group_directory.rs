//! In-memory group directory

use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::entities::{Group, GroupId, MemberId};
use crate::domain::ports::GroupDirectory;
use crate::error::DomainError;

struct StoredGroup {
    group: Group,
    joined: HashSet<MemberId>,
}

impl StoredGroup {
    fn view(&self, viewer: &MemberId) -> Group {
        let mut group = self.group.clone();
        group.is_joined = self.joined.contains(viewer);
        group
    }
}

#[derive(Default)]
pub struct InMemoryGroupDirectory {
    groups: RwLock<Vec<StoredGroup>>,
}

impl InMemoryGroupDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a group with the members already in it. `group.members` is
    /// taken as the displayed member count and is not recomputed.
    pub fn with_group(mut self, group: Group, joined: &[MemberId]) -> Self {
        self.groups
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .push(StoredGroup {
                group,
                joined: joined.iter().cloned().collect(),
            });
        self
    }

    /// Directory pre-populated with the starter groups
    pub fn seeded() -> Self {
        super::seed::seed_groups()
    }
}

fn poisoned<T>(_: PoisonError<T>) -> DomainError {
    DomainError::Internal("group directory lock poisoned".to_string())
}

#[async_trait]
impl GroupDirectory for InMemoryGroupDirectory {
    async fn list_groups(&self, viewer: &MemberId) -> Result<Vec<Group>, DomainError> {
        let groups = self.groups.read().map_err(poisoned)?;
        Ok(groups.iter().map(|g| g.view(viewer)).collect())
    }

    async fn toggle_membership(
        &self,
        id: GroupId,
        member: &MemberId,
    ) -> Result<Option<Group>, DomainError> {
        let mut groups = self.groups.write().map_err(poisoned)?;
        let Some(stored) = groups.iter_mut().find(|g| g.group.id == id) else {
            tracing::debug!(group_id = %id, "Membership change ignored, group not found");
            return Ok(None);
        };

        if stored.joined.remove(member) {
            stored.group.members = stored.group.members.saturating_sub(1);
            tracing::debug!(group = %stored.group.name, member = %member, "Left group");
        } else {
            stored.joined.insert(member.clone());
            stored.group.members = stored.group.members.saturating_add(1);
            tracing::debug!(group = %stored.group.name, member = %member, "Joined group");
        }

        Ok(Some(stored.view(member)))
    }
}
