//! Session persistence with external-change observation
//!
//! One JSON file holds the current session record; its absence means
//! "signed out". A malformed file reads as absent, never as an error.
//! `FileSessionStore` remembers the last value this process wrote or
//! observed, so `poll_external` only reports changes made by another
//! process (the cross-instance analogue of a storage event).

use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::rc::{Rc, Weak};

use super::SessionRecord;

/// File name of the persisted session record.
const SESSION_FILE_NAME: &str = "session.json";

/// Configuration directory under ~/.config.
const CONFIG_DIR_NAME: &str = "folio";

/// Errors from writing or clearing the persisted session.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not determine config directory")]
    NoConfigDir,

    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Read/write/clear access to the single session record.
///
/// Reads never fail: a missing or malformed stored value is reported
/// as `None`. `clear` is idempotent.
pub trait SessionStore {
    fn read(&self) -> Option<SessionRecord>;
    fn write(&self, record: &SessionRecord) -> Result<(), StoreError>;
    fn clear(&self) -> Result<(), StoreError>;
}

type ChangeCallback = Rc<dyn Fn(Option<&SessionRecord>)>;

/// Session store backed by a JSON file under the user config directory.
pub struct FileSessionStore {
    path: PathBuf,
    /// Serialized form of the last value this store wrote or observed.
    snapshot: RefCell<Option<String>>,
    subscribers: RefCell<Vec<(u64, ChangeCallback)>>,
    next_id: Cell<u64>,
}

impl FileSessionStore {
    /// Open the store at the default location, creating the config
    /// directory if needed.
    pub fn open_default() -> Result<Rc<Self>, StoreError> {
        let dir = dirs::config_dir()
            .ok_or(StoreError::NoConfigDir)?
            .join(CONFIG_DIR_NAME);
        fs::create_dir_all(&dir)?;
        Ok(Self::at_path(dir.join(SESSION_FILE_NAME)))
    }

    /// Open the store at an explicit path.
    pub fn at_path(path: PathBuf) -> Rc<Self> {
        let snapshot = fs::read_to_string(&path).ok();
        Rc::new(Self {
            path,
            snapshot: RefCell::new(snapshot),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        })
    }

    /// Register a callback for changes made outside this store.
    ///
    /// Writes and clears performed through this store never notify;
    /// callers that mutate locally re-read themselves. Dropping the
    /// returned `Subscription` unregisters the callback.
    pub fn subscribe(
        self: &Rc<Self>,
        callback: impl Fn(Option<&SessionRecord>) + 'static,
    ) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        Subscription {
            id,
            store: Rc::downgrade(self),
        }
    }

    /// Re-read the file and report a change made by another process.
    ///
    /// Returns `Some(new_value)` and notifies subscribers when the
    /// on-disk value differs from the last one seen here, `None`
    /// otherwise.
    pub fn poll_external(&self) -> Option<Option<SessionRecord>> {
        let current = fs::read_to_string(&self.path).ok();
        if current == *self.snapshot.borrow() {
            return None;
        }
        *self.snapshot.borrow_mut() = current.clone();

        let record = current.as_deref().and_then(|contents| {
            match serde_json::from_str::<SessionRecord>(contents) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("malformed session record observed externally: {e}");
                    None
                }
            }
        });

        // Snapshot the callbacks so one of them may subscribe or
        // unsubscribe without a re-entrant borrow.
        let callbacks: Vec<ChangeCallback> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        for callback in callbacks {
            callback(record.as_ref());
        }

        Some(record)
    }

    fn unsubscribe(&self, id: u64) {
        self.subscribers.borrow_mut().retain(|(sid, _)| *sid != id);
    }
}

impl SessionStore for FileSessionStore {
    fn read(&self) -> Option<SessionRecord> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                if e.kind() != io::ErrorKind::NotFound {
                    tracing::warn!("failed to read session file: {e}");
                }
                return None;
            }
        };
        match serde_json::from_str(&contents) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("malformed session record, treating as signed out: {e}");
                None
            }
        }
    }

    fn write(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, &contents)?;

        // Restrictive permissions (Unix only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600))?;
        }

        *self.snapshot.borrow_mut() = Some(contents);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        *self.snapshot.borrow_mut() = None;
        Ok(())
    }
}

/// Disposer returned by [`FileSessionStore::subscribe`]; dropping it
/// unregisters the callback.
pub struct Subscription {
    id: u64,
    store: Weak<FileSessionStore>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.upgrade() {
            store.unsubscribe(self.id);
        }
    }
}

/// In-process store used by tests and headless scenarios.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    value: RefCell<Option<SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl SessionStore for MemorySessionStore {
    fn read(&self) -> Option<SessionRecord> {
        self.value.borrow().clone()
    }

    fn write(&self, record: &SessionRecord) -> Result<(), StoreError> {
        *self.value.borrow_mut() = Some(record.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        *self.value.borrow_mut() = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_roundtrips() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::at_path(dir.path().join("session.json"));

        let record = SessionRecord::for_email("a@b.com");
        store.write(&record).unwrap();
        assert_eq!(store.read(), Some(record));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::at_path(dir.path().join("session.json"));

        store.write(&SessionRecord::for_email("a@b.com")).unwrap();
        store.clear().unwrap();
        assert_eq!(store.read(), None);
        store.clear().unwrap();
        assert_eq!(store.read(), None);
    }

    #[test]
    fn malformed_file_reads_as_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = FileSessionStore::at_path(path);
        assert_eq!(store.read(), None);
    }

    #[test]
    fn own_writes_do_not_notify() {
        let dir = tempdir().unwrap();
        let store = FileSessionStore::at_path(dir.path().join("session.json"));

        store.write(&SessionRecord::for_email("a@b.com")).unwrap();
        assert!(store.poll_external().is_none());
        store.clear().unwrap();
        assert!(store.poll_external().is_none());
    }

    #[test]
    fn external_writes_notify_subscribers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let ours = FileSessionStore::at_path(path.clone());
        let theirs = FileSessionStore::at_path(path);

        let seen = Rc::new(Cell::new(0u32));
        let seen_in_cb = Rc::clone(&seen);
        let _sub = ours.subscribe(move |record| {
            assert!(record.is_some());
            seen_in_cb.set(seen_in_cb.get() + 1);
        });

        theirs.write(&SessionRecord::for_email("a@b.com")).unwrap();
        let change = ours.poll_external().expect("change should be observed");
        assert_eq!(change.map(|r| r.email), Some("a@b.com".to_string()));
        assert_eq!(seen.get(), 1);

        // Unchanged file: no further notification.
        assert!(ours.poll_external().is_none());
        assert_eq!(seen.get(), 1);
    }

    #[test]
    fn dropped_subscription_stops_notifying() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let ours = FileSessionStore::at_path(path.clone());
        let theirs = FileSessionStore::at_path(path);

        let seen = Rc::new(Cell::new(0u32));
        let seen_in_cb = Rc::clone(&seen);
        let sub = ours.subscribe(move |_| seen_in_cb.set(seen_in_cb.get() + 1));
        drop(sub);

        theirs.write(&SessionRecord::for_email("a@b.com")).unwrap();
        assert!(ours.poll_external().is_some());
        assert_eq!(seen.get(), 0);
    }

    #[test]
    fn external_clear_reports_signed_out() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("session.json");
        let ours = FileSessionStore::at_path(path.clone());
        let theirs = FileSessionStore::at_path(path);

        theirs.write(&SessionRecord::for_email("a@b.com")).unwrap();
        ours.poll_external();
        theirs.clear().unwrap();
        assert_eq!(ours.poll_external(), Some(None));
    }

    #[test]
    fn memory_store_roundtrips() {
        let store = MemorySessionStore::new();
        let record = SessionRecord::for_email("dev@example.com");
        store.write(&record).unwrap();
        assert_eq!(store.read(), Some(record));
        store.clear().unwrap();
        store.clear().unwrap();
        assert_eq!(store.read(), None);
    }
}
