//! Shared fixtures: a vault in a temp directory with a few stored sends

#![allow(dead_code)]

use std::path::Path;

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

use sendcli::config::{SendPaths, Settings};
use sendcli::crypto::{KeyDerivationParams, SendCrypto, VaultSendCrypto};
use sendcli::models::{
    FileId, SendFileView, SendId, SendTextView, SendType, SendView,
};
use sendcli::storage::{SendStore, Storage};

pub const PASSPHRASE: &str = "correct horse battery";

pub struct Vault {
    pub dir: TempDir,
    pub paths: SendPaths,
    pub settings: Settings,
    pub storage: Storage,
    pub crypto: VaultSendCrypto,
}

/// Cheap key derivation so tests stay fast
pub fn light_params() -> KeyDerivationParams {
    KeyDerivationParams {
        memory_cost: 8 * 1024,
        time_cost: 1,
        parallelism: 1,
        ..KeyDerivationParams::new()
    }
}

pub fn text_view(id: &str) -> SendView {
    let created = Utc.with_ymd_and_hms(2030, 3, 1, 9, 30, 0).unwrap();
    SendView {
        id: SendId::parse(id),
        access_id: format!("access-{}", id),
        name: "Door code".into(),
        notes: Some("back entrance".into()),
        send_type: SendType::Text,
        text: Some(SendTextView {
            text: Some("4711".into()),
            hidden: false,
        }),
        file: None,
        max_access_count: Some(3),
        access_count: 0,
        revision_date: created,
        deletion_date: created + Duration::days(7),
        expiration_date: Some(created + Duration::days(2)),
        password_set: false,
        disabled: false,
        hide_email: false,
    }
}

pub fn file_view(id: &str) -> SendView {
    SendView {
        name: "Floor plan".into(),
        send_type: SendType::File,
        text: None,
        file: Some(SendFileView::new(Some(FileId::parse("file-1")), "plan.pdf", 0)),
        ..text_view(id)
    }
}

impl Vault {
    /// An initialized vault holding text send `t1` and file send `f1`
    pub fn create(premium: bool) -> Self {
        let dir = TempDir::new().unwrap();
        let paths = SendPaths::with_base_dir(dir.path().to_path_buf());

        let (crypto, encryption) = VaultSendCrypto::initialize(PASSPHRASE, light_params()).unwrap();
        let mut settings = Settings::default();
        settings.encryption = encryption;
        settings.account.premium = premium;
        settings.access_base_url = "https://send.example.com".into();
        settings.save(&paths).unwrap();

        let storage = Storage::new(paths.clone()).unwrap();
        let vault = Self {
            dir,
            paths,
            settings,
            storage,
            crypto,
        };

        vault.insert(&text_view("t1"), None);
        vault.insert(&file_view("f1"), Some(b"%PDF-1.7 floor plan"));
        vault
    }

    pub fn insert(&self, view: &SendView, file_bytes: Option<&[u8]>) {
        let (mut send, file_data) = self.crypto.encrypt(view, file_bytes, None).unwrap();
        send.deletion_date = Some(view.deletion_date);
        send.expiration_date = view.expiration_date;
        self.storage.save(send, file_data).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Storage freshly loaded from disk
    pub fn reopen(&self) -> Storage {
        let mut storage = Storage::new(self.paths.clone()).unwrap();
        storage.load_all().unwrap();
        storage
    }

    pub fn stored_view(&self, id: &str) -> SendView {
        let stored = self.reopen().get(&SendId::parse(id)).unwrap().unwrap();
        self.crypto.decrypt(&stored).unwrap()
    }
}
