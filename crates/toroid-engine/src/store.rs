//! The session store: every live lattice, addressed by [`SessionId`].
//!
//! The table of sessions sits behind one mutex that is held only long
//! enough to reserve an ID or look up a session. Each session has its own
//! mutex, so different sessions advance concurrently while advances of the
//! same session are serialized: two concurrent advances of one ID always
//! apply two full steps, one after the other.

use std::sync::{Arc, Mutex, MutexGuard};

use indexmap::IndexMap;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use toroid_core::{Dims, EntropySource, NeighborMode, SessionError, SessionId};
use toroid_lattice::Lattice;
use toroid_rule::RuleTable;

use crate::config::{ConfigError, StoreConfig};
use crate::session::{Advanced, Seeding, Session, SessionSnapshot};
use crate::step::step;

type SessionArc = Arc<Mutex<Session>>;

/// Smallest half-extent accepted on each axis the update reads.
const MIN_HALF_EXTENT: usize = 2;

#[derive(Debug, Default)]
struct SessionTable {
    next_id: u64,
    sessions: IndexMap<SessionId, SessionArc>,
}

/// Owner of all sessions.
///
/// IDs are assigned from a counter starting at 0 that only moves forward:
/// an ID is never reused, even after [`remove`](Self::remove), and a failed
/// creation does not consume one.
#[derive(Debug)]
pub struct SessionStore {
    config: StoreConfig,
    table: Mutex<SessionTable>,
}

// Compile-time assertion: the store is shared across request threads.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<SessionStore>();
};

/// Lock `mutex`, recovering the guard if a previous holder panicked.
///
/// Session state is only replaced after a step has fully completed, so the
/// data behind a poisoned lock is always a consistent earlier state.
fn lock_recovering<'a, T>(mutex: &'a Mutex<T>, what: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        tracing::warn!("recovered poisoned {} lock", what);
        poisoned.into_inner()
    })
}

fn invalid(dims: Dims, mode: Option<NeighborMode>, reason: String) -> SessionError {
    SessionError::InvalidDimensions { dims, mode, reason }
}

impl SessionStore {
    /// Validate `config` and create an empty store.
    pub fn new(config: StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            table: Mutex::new(SessionTable::default()),
        })
    }

    /// The store's configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Check `dims` against the mode's minimum extents and the cell ceiling.
    ///
    /// One-axis sessions need `x/2 >= 2` and non-empty Y and Z. Three-axis
    /// sessions need `x/2`, `y/2` and `z/2` all at least 2.
    pub fn validate_dims(&self, dims: Dims, mode: NeighborMode) -> Result<usize, SessionError> {
        let checked_axes: &[(char, usize)] = match mode {
            NeighborMode::OneAxis => &[('x', dims.x)],
            NeighborMode::ThreeAxis => &[('x', dims.x), ('y', dims.y), ('z', dims.z)],
        };
        for &(name, extent) in checked_axes {
            if extent / 2 < MIN_HALF_EXTENT {
                return Err(invalid(
                    dims,
                    Some(mode),
                    format!("{name}/2 must be at least {MIN_HALF_EXTENT}, got {extent}"),
                ));
            }
        }
        if dims.has_zero_extent() {
            return Err(invalid(dims, Some(mode), "every extent must be at least 1".into()));
        }
        let cells = dims
            .checked_cell_count()
            .ok_or_else(|| invalid(dims, None, "cell count overflows usize".into()))?;
        if cells > self.config.max_cells {
            return Err(invalid(
                dims,
                None,
                format!(
                    "{cells} cells exceeds the limit of {}",
                    self.config.max_cells
                ),
            ));
        }
        Ok(cells)
    }

    /// Create a session seeded according to `seeding`.
    ///
    /// Returns the new ID and the initial lattice (the state at step 0).
    /// Dimensions are validated before anything is allocated; on failure
    /// nothing is stored and no ID is consumed.
    pub fn create_session(
        &self,
        dims: Dims,
        seeding: Seeding,
        mode: NeighborMode,
    ) -> Result<(SessionId, Lattice), SessionError> {
        self.validate_dims(dims, mode)?;
        let mut lattice = Lattice::new(dims)?;
        match seeding {
            Seeding::Center => {
                let (x, y, z) = dims.center();
                lattice.set(x, y, z, true);
            }
            Seeding::Random { seed } => {
                let mut rng = match seed {
                    Some(seed) => ChaCha8Rng::seed_from_u64(seed),
                    None => ChaCha8Rng::from_rng(&mut rand::rng()),
                };
                lattice.fill_from(&mut || rng.random::<bool>());
            }
        }
        Ok(self.insert(lattice, mode))
    }

    /// Create a session whose cells are drawn from `source`, one bit per
    /// cell in canonical order.
    pub fn create_session_with(
        &self,
        dims: Dims,
        mode: NeighborMode,
        source: &mut dyn EntropySource,
    ) -> Result<(SessionId, Lattice), SessionError> {
        self.validate_dims(dims, mode)?;
        let mut lattice = Lattice::new(dims)?;
        lattice.fill_from(source);
        Ok(self.insert(lattice, mode))
    }

    fn insert(&self, lattice: Lattice, mode: NeighborMode) -> (SessionId, Lattice) {
        let dims = lattice.dims();
        let mut table = lock_recovering(&self.table, "session table");
        let id = SessionId(table.next_id);
        table.next_id += 1;
        let session = Session::new(id, lattice.clone(), mode);
        table.sessions.insert(id, Arc::new(Mutex::new(session)));
        drop(table);
        tracing::debug!("created session {} ({}, {})", id, dims, mode);
        (id, lattice)
    }

    /// Clone the handle for `id`, briefly locking the table.
    fn session(&self, id: SessionId) -> Result<SessionArc, SessionError> {
        lock_recovering(&self.table, "session table")
            .sessions
            .get(&id)
            .cloned()
            .ok_or(SessionError::UnknownSession { id })
    }

    /// A copy of the session's current lattice.
    pub fn get(&self, id: SessionId) -> Result<Lattice, SessionError> {
        let session = self.session(id)?;
        let guard = lock_recovering(&session, "session");
        Ok(guard.lattice.clone())
    }

    /// A consistent copy of the session's ID, step counter, mode and lattice.
    pub fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, SessionError> {
        let session = self.session(id)?;
        let guard = lock_recovering(&session, "session");
        Ok(guard.snapshot())
    }

    /// Apply one step of `rule` to the session and store the result.
    ///
    /// The read, the step and the write happen under the session's lock,
    /// so concurrent advances of the same ID never lose an update.
    pub fn advance(&self, id: SessionId, rule: &RuleTable) -> Result<Advanced, SessionError> {
        let session = self.session(id)?;
        let mut guard = lock_recovering(&session, "session");
        let next = step(&guard.lattice, *rule, guard.mode);
        guard.lattice = next;
        guard.step = guard.step.next();
        tracing::debug!("advanced session {} to step {}", id, guard.step);
        Ok(Advanced {
            lattice: guard.lattice.clone(),
            step: guard.step,
        })
    }

    /// Drop a session, returning its final lattice.
    ///
    /// An advance already holding the session's lock completes; later
    /// lookups of `id` fail with `UnknownSession`.
    pub fn remove(&self, id: SessionId) -> Result<Lattice, SessionError> {
        let session = lock_recovering(&self.table, "session table")
            .sessions
            .shift_remove(&id)
            .ok_or(SessionError::UnknownSession { id })?;
        let lattice = lock_recovering(&session, "session").lattice.clone();
        tracing::debug!("removed session {}", id);
        Ok(lattice)
    }

    /// Whether `id` names a live session.
    pub fn contains(&self, id: SessionId) -> bool {
        lock_recovering(&self.table, "session table")
            .sessions
            .contains_key(&id)
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        lock_recovering(&self.table, "session table").sessions.len()
    }

    /// Whether the store holds no sessions.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// IDs of live sessions, in creation order.
    pub fn session_ids(&self) -> Vec<SessionId> {
        lock_recovering(&self.table, "session table")
            .sessions
            .keys()
            .copied()
            .collect()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            config: StoreConfig::default(),
            table: Mutex::new(SessionTable::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toroid_core::StepId;
    use toroid_test_utils::PatternSource;

    fn store() -> SessionStore {
        SessionStore::default()
    }

    fn dims(x: usize, y: usize, z: usize) -> Dims {
        Dims::new(x, y, z)
    }

    // ── Creation ────────────────────────────────────────────────

    #[test]
    fn center_seeding_sets_exactly_the_center() {
        let s = store();
        let (id, lattice) = s
            .create_session(dims(5, 5, 5), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap();
        assert_eq!(id, SessionId(0));
        assert_eq!(lattice.live_cells(), vec![(2, 2, 2)]);
        assert_eq!(s.get(id).unwrap(), lattice);
    }

    #[test]
    fn center_uses_integer_division() {
        let s = store();
        let (_, lattice) = s
            .create_session(dims(6, 4, 5), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap();
        assert_eq!(lattice.live_cells(), vec![(3, 2, 2)]);
    }

    #[test]
    fn ids_are_monotonic() {
        let s = store();
        let ids: Vec<_> = (0..4)
            .map(|_| {
                s.create_session(dims(4, 1, 1), Seeding::Center, NeighborMode::OneAxis)
                    .unwrap()
                    .0
            })
            .collect();
        assert_eq!(ids, vec![SessionId(0), SessionId(1), SessionId(2), SessionId(3)]);
        assert_eq!(s.session_ids(), ids);
    }

    #[test]
    fn three_axis_rejects_3x3x3_and_accepts_5x5x5() {
        let s = store();
        let err = s
            .create_session(dims(3, 3, 3), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidDimensions {
                mode: Some(NeighborMode::ThreeAxis),
                ..
            }
        ));
        assert!(s.is_empty());
        let (id, _) = s
            .create_session(dims(5, 5, 5), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap();
        // The failed attempt did not consume an ID.
        assert_eq!(id, SessionId(0));
    }

    #[test]
    fn three_axis_checks_every_axis() {
        let s = store();
        for d in [dims(3, 5, 5), dims(5, 3, 5), dims(5, 5, 3)] {
            assert!(s
                .create_session(d, Seeding::Center, NeighborMode::ThreeAxis)
                .is_err());
        }
        assert!(s
            .create_session(dims(4, 4, 4), Seeding::Center, NeighborMode::ThreeAxis)
            .is_ok());
    }

    #[test]
    fn one_axis_only_constrains_x() {
        let s = store();
        assert!(s
            .create_session(dims(3, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .is_err());
        assert!(s
            .create_session(dims(4, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .is_ok());
        assert!(s
            .create_session(dims(4, 0, 1), Seeding::Center, NeighborMode::OneAxis)
            .is_err());
    }

    #[test]
    fn new_rejects_zero_max_cells() {
        let err = SessionStore::new(StoreConfig { max_cells: 0 }).unwrap_err();
        assert_eq!(err, ConfigError::ZeroMaxCells);
    }

    #[test]
    fn max_cells_is_enforced() {
        let s = SessionStore::new(StoreConfig { max_cells: 100 }).unwrap();
        let err = s
            .create_session(dims(5, 5, 5), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap_err();
        assert!(err.to_string().contains("125 cells"));
        assert!(s
            .create_session(dims(4, 4, 4), Seeding::Center, NeighborMode::ThreeAxis)
            .is_ok());
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let s = store();
        let seeding = Seeding::Random { seed: Some(7) };
        let (_, a) = s
            .create_session(dims(8, 8, 8), seeding, NeighborMode::ThreeAxis)
            .unwrap();
        let (_, b) = s
            .create_session(dims(8, 8, 8), seeding, NeighborMode::ThreeAxis)
            .unwrap();
        assert_eq!(a, b);
        // 512 fair coin flips: all-dead or all-live would be astronomically unlikely.
        assert!(a.live_count() > 0 && a.live_count() < 512);
    }

    #[test]
    fn create_session_with_draws_in_canonical_order() {
        let s = store();
        let mut source = PatternSource::new(vec![true, false, false]);
        let (_, lattice) = s
            .create_session_with(dims(4, 1, 1), NeighborMode::OneAxis, &mut source)
            .unwrap();
        assert_eq!(lattice.live_cells(), vec![(0, 0, 0), (3, 0, 0)]);
    }

    // ── Lookup and advance ──────────────────────────────────────

    #[test]
    fn unknown_session_errors() {
        let s = store();
        let id = SessionId(42);
        assert_eq!(s.get(id), Err(SessionError::UnknownSession { id }));
        let rule = RuleTable::from_eca_number(90);
        assert_eq!(s.advance(id, &rule), Err(SessionError::UnknownSession { id }));
        assert!(!s.contains(id));
        assert!(s.is_empty());
    }

    #[test]
    fn advance_stores_result_and_counts_steps() {
        let s = store();
        let (id, _) = s
            .create_session(dims(5, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .unwrap();
        let rule = RuleTable::from_eca_number(90);
        let first = s.advance(id, &rule).unwrap();
        assert_eq!(first.step, StepId(1));
        assert_eq!(first.lattice.live_cells(), vec![(1, 0, 0), (3, 0, 0)]);
        assert_eq!(s.get(id).unwrap(), first.lattice);
        let second = s.advance(id, &rule).unwrap();
        assert_eq!(second.step, StepId(2));
        assert_eq!(s.snapshot(id).unwrap().step, StepId(2));
    }

    #[test]
    fn sessions_are_isolated() {
        let s = store();
        let (a, a0) = s
            .create_session(dims(5, 5, 5), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap();
        let (b, b0) = s
            .create_session(dims(5, 5, 5), Seeding::Center, NeighborMode::ThreeAxis)
            .unwrap();
        let rule = RuleTable::from_raw_bits(u128::MAX);
        for _ in 0..3 {
            s.advance(a, &rule).unwrap();
        }
        assert_ne!(s.get(a).unwrap(), a0);
        assert_eq!(s.get(b).unwrap(), b0);
        assert_eq!(s.snapshot(b).unwrap().step, StepId(0));
    }

    #[test]
    fn remove_never_reuses_ids() {
        let s = store();
        let (a, _) = s
            .create_session(dims(4, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .unwrap();
        assert!(s.remove(a).is_ok());
        assert!(!s.contains(a));
        assert_eq!(s.remove(a), Err(SessionError::UnknownSession { id: a }));
        let (b, _) = s
            .create_session(dims(4, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .unwrap();
        assert_eq!(b, SessionId(1));
    }

    // ── Concurrency ─────────────────────────────────────────────

    #[test]
    fn concurrent_advances_of_one_session_serialize() {
        let s = store();
        let (id, _) = s
            .create_session(dims(8, 1, 1), Seeding::Center, NeighborMode::OneAxis)
            .unwrap();
        let rule = RuleTable::from_eca_number(30);
        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        s.advance(id, &rule).unwrap();
                    }
                });
            }
        });

        let snapshot = s.snapshot(id).unwrap();
        assert_eq!(snapshot.step, StepId(100));

        // Same result as 100 sequential steps.
        let mut expected = Lattice::new(dims(8, 1, 1)).unwrap();
        expected.set(4, 0, 0, true);
        for _ in 0..100 {
            expected = step(&expected, rule, NeighborMode::OneAxis);
        }
        assert_eq!(snapshot.lattice, expected);
    }

    #[test]
    fn concurrent_creation_yields_distinct_ids() {
        let s = store();
        let mut ids: Vec<SessionId> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    scope.spawn(|| {
                        s.create_session(dims(4, 4, 4), Seeding::Center, NeighborMode::ThreeAxis)
                            .unwrap()
                            .0
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        ids.sort();
        assert_eq!(ids, (0..8).map(SessionId).collect::<Vec<_>>());
    }
}
