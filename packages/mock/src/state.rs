//! In-memory state behind the mock service.
//!
//! All data lives behind one [`RwLock`] and is lost when the value is
//! dropped. Handlers hold the lock only for the duration of a single method
//! call, never across an `.await`.
//!
//! The `pub` methods double as test hooks: tests seed users and channels,
//! play the account owner by approving or revoking signers, and inspect the
//! request log to assert that a step never reached the service.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use alloy_primitives::Address;
use neynar_api::{Cast, Channel, ReactionType, Signer, SignerStatus, UpdateUserRequest, User};

// ---------------------------------------------------------------------------
// Internal state
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Inner {
    users: BTreeMap<u64, User>,
    signers: HashMap<String, Signer>,
    /// Insertion order; newest last.
    casts: Vec<Cast>,
    reactions: HashSet<(u64, ReactionType, String)>,
    /// `(follower, target)`.
    follows: BTreeSet<(u64, u64)>,
    channels: HashMap<String, Channel>,
    requests: Vec<String>,
    seq: u64,
}

impl Inner {
    /// Stored user with follow counts filled in from the graph.
    fn user_view(&self, fid: u64) -> Option<User> {
        self.users.get(&fid).map(|u| {
            let mut user = u.clone();
            user.follower_count = self.follows.iter().filter(|(_, t)| *t == fid).count() as u64;
            user.following_count = self.follows.iter().filter(|(f, _)| *f == fid).count() as u64;
            user
        })
    }
}

// ---------------------------------------------------------------------------
// MockState
// ---------------------------------------------------------------------------

/// Thread-safe state shared by every handler of one mock instance.
pub struct MockState {
    inner: RwLock<Inner>,
}

impl MockState {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    // --- Test hooks ---------------------------------------------------------

    /// Insert or replace a user.
    pub fn seed_user(&self, user: User) {
        self.write().users.insert(user.fid, user);
    }

    pub fn seed_channel(&self, channel: Channel) {
        self.write().channels.insert(channel.id.clone(), channel);
    }

    /// Act as the account owner approving a `pending_approval` signer, which
    /// then writes on behalf of `fid`. Returns `false` if the signer is
    /// unknown or not pending.
    pub fn approve_signer(&self, signer_uuid: &str, fid: u64) -> bool {
        let mut inner = self.write();
        match inner.signers.get_mut(signer_uuid) {
            Some(s) if s.status == SignerStatus::PendingApproval => {
                s.status = SignerStatus::Approved;
                s.fid = Some(fid);
                s.signer_approval_url = None;
                true
            }
            _ => false,
        }
    }

    /// Returns `false` if the signer is unknown or already revoked.
    pub fn revoke_signer(&self, signer_uuid: &str) -> bool {
        let mut inner = self.write();
        match inner.signers.get_mut(signer_uuid) {
            Some(s) if s.status != SignerStatus::Revoked => {
                s.status = SignerStatus::Revoked;
                true
            }
            _ => false,
        }
    }

    pub fn signer(&self, signer_uuid: &str) -> Option<Signer> {
        self.read().signers.get(signer_uuid).cloned()
    }

    /// `"METHOD /path"` for every request received, in arrival order.
    pub fn request_log(&self) -> Vec<String> {
        self.read().requests.clone()
    }

    /// Casts authored by `fid`, newest first.
    pub fn casts_by(&self, fid: u64) -> Vec<Cast> {
        self.casts_where(|c| c.author.fid == fid)
    }

    /// Fids that `fid` follows.
    pub fn following(&self, fid: u64) -> Vec<u64> {
        self.read()
            .follows
            .iter()
            .filter(|(f, _)| *f == fid)
            .map(|(_, t)| *t)
            .collect()
    }

    pub fn user(&self, fid: u64) -> Option<User> {
        self.read().user_view(fid)
    }

    // --- Handler operations -------------------------------------------------

    pub(crate) fn record_request(&self, line: String) {
        self.write().requests.push(line);
    }

    pub(crate) fn next_seq(&self) -> u64 {
        let mut inner = self.write();
        inner.seq += 1;
        inner.seq
    }

    pub(crate) fn user_by_custody(&self, address: Address) -> Option<User> {
        let inner = self.read();
        let fid = inner.users.values().find_map(|u| {
            let custody = u.custody_address.as_deref()?.parse::<Address>().ok()?;
            (custody == address).then_some(u.fid)
        })?;
        inner.user_view(fid)
    }

    pub(crate) fn users(&self, fids: &[u64]) -> Vec<User> {
        let inner = self.read();
        fids.iter().filter_map(|fid| inner.user_view(*fid)).collect()
    }

    /// Apply the set fields of `update` to `fid`'s profile.
    pub(crate) fn update_user(&self, fid: u64, update: &UpdateUserRequest) -> Option<User> {
        let mut inner = self.write();
        let user = inner.users.get_mut(&fid)?;
        if let Some(bio) = &update.bio {
            user.profile.bio.text = bio.clone();
        }
        if let Some(pfp_url) = &update.pfp_url {
            user.pfp_url = Some(pfp_url.clone());
        }
        if let Some(username) = &update.username {
            user.username = username.clone();
        }
        if let Some(display_name) = &update.display_name {
            user.display_name = Some(display_name.clone());
        }
        inner.user_view(fid)
    }

    pub(crate) fn insert_signer(&self, signer: Signer) {
        self.write()
            .signers
            .insert(signer.signer_uuid.clone(), signer);
    }

    /// Move a signer from `generated` to `pending_approval`. Returns `None`
    /// if it is gone or was moved by someone else in the meantime.
    pub(crate) fn complete_registration(
        &self,
        signer_uuid: &str,
        approval_url: String,
    ) -> Option<Signer> {
        let mut inner = self.write();
        let signer = inner.signers.get_mut(signer_uuid)?;
        if signer.status != SignerStatus::Generated {
            return None;
        }
        signer.status = SignerStatus::PendingApproval;
        signer.signer_approval_url = Some(approval_url);
        Some(signer.clone())
    }

    pub(crate) fn cast(&self, hash: &str) -> Option<Cast> {
        self.read().casts.iter().find(|c| c.hash == hash).cloned()
    }

    pub(crate) fn insert_cast(&self, cast: Cast) {
        self.write().casts.push(cast);
    }

    pub(crate) fn remove_cast(&self, hash: &str) -> Option<Cast> {
        let mut inner = self.write();
        let idx = inner.casts.iter().position(|c| c.hash == hash)?;
        let cast = inner.casts.remove(idx);
        inner.reactions.retain(|(_, _, target)| target != hash);
        Some(cast)
    }

    /// Casts matching `pred`, newest first.
    pub(crate) fn casts_where(&self, pred: impl Fn(&Cast) -> bool) -> Vec<Cast> {
        self.read()
            .casts
            .iter()
            .rev()
            .filter(|c| pred(c))
            .cloned()
            .collect()
    }

    pub(crate) fn add_reaction(&self, fid: u64, kind: ReactionType, target: &str) {
        self.write()
            .reactions
            .insert((fid, kind, target.to_string()));
    }

    pub(crate) fn remove_reaction(&self, fid: u64, kind: ReactionType, target: &str) {
        self.write()
            .reactions
            .remove(&(fid, kind, target.to_string()));
    }

    pub fn has_reaction(&self, fid: u64, kind: ReactionType, target: &str) -> bool {
        self.read()
            .reactions
            .contains(&(fid, kind, target.to_string()))
    }

    /// `false` if `target` is not a known user.
    pub(crate) fn add_follow(&self, follower: u64, target: u64) -> bool {
        let mut inner = self.write();
        if !inner.users.contains_key(&target) {
            return false;
        }
        inner.follows.insert((follower, target));
        true
    }

    pub(crate) fn remove_follow(&self, follower: u64, target: u64) -> bool {
        self.write().follows.remove(&(follower, target))
    }

    /// Users following `fid`. Followers without a stored profile are
    /// returned as bare fids.
    pub(crate) fn followers(&self, fid: u64) -> Vec<User> {
        let inner = self.read();
        inner
            .follows
            .iter()
            .filter(|(_, t)| *t == fid)
            .map(|(f, _)| {
                inner
                    .user_view(*f)
                    .unwrap_or_else(|| User::new(*f, String::new()))
            })
            .collect()
    }

    pub(crate) fn channel(&self, id: &str) -> Option<Channel> {
        self.read().channels.get(id).cloned()
    }
}

impl Default for MockState {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn signer(uuid: &str, status: SignerStatus) -> Signer {
        Signer {
            signer_uuid: uuid.into(),
            public_key: "0xdead".into(),
            status,
            signer_approval_url: None,
            fid: None,
        }
    }

    #[test]
    fn registration_only_moves_generated_signers() {
        let state = MockState::new();
        state.insert_signer(signer("a", SignerStatus::Generated));

        let pending = state.complete_registration("a", "url".into()).unwrap();
        assert_eq!(pending.status, SignerStatus::PendingApproval);
        assert!(state.complete_registration("a", "url".into()).is_none());
        assert!(state.complete_registration("missing", "url".into()).is_none());
    }

    #[test]
    fn approval_requires_pending_state() {
        let state = MockState::new();
        state.insert_signer(signer("a", SignerStatus::Generated));
        assert!(!state.approve_signer("a", 7));

        state.complete_registration("a", "url".into());
        assert!(state.approve_signer("a", 7));
        let approved = state.signer("a").unwrap();
        assert_eq!(approved.status, SignerStatus::Approved);
        assert_eq!(approved.fid, Some(7));
    }

    #[test]
    fn custody_lookup_ignores_case() {
        let state = MockState::new();
        let mut user = User::new(194, "rish");
        user.custody_address = Some("0xF39FD6E51AAD88F6F4CE6AB8827279CFFFB92266".into());
        state.seed_user(user);

        let address: Address = "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266".parse().unwrap();
        assert_eq!(state.user_by_custody(address).map(|u| u.fid), Some(194));
    }

    #[test]
    fn follow_counts_are_derived() {
        let state = MockState::new();
        state.seed_user(User::new(1, "a"));
        state.seed_user(User::new(2, "b"));
        assert!(state.add_follow(1, 2));
        assert!(!state.add_follow(1, 99));

        assert_eq!(state.user(2).unwrap().follower_count, 1);
        assert_eq!(state.user(1).unwrap().following_count, 1);
        assert_eq!(state.following(1), vec![2]);
        assert!(state.remove_follow(1, 2));
        assert_eq!(state.user(2).unwrap().follower_count, 0);
    }
}
