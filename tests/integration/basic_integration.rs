/// Integration tests covering persistence and full sessions
use address_book::*;
use tempfile::tempdir;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    async fn run_session(storage: FileStorage, book: AddressBook, script: &str) -> (AddressBook, String) {
        let mut session = Session::new(book, storage, Style::plain());
        let mut output: Vec<u8> = Vec::new();
        session
            .run(script.as_bytes(), &mut output)
            .await
            .expect("Session failed");
        (session.book().clone(), String::from_utf8(output).unwrap())
    }

    #[tokio::test]
    async fn test_session_persists_between_runs() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join(DEFAULT_FILE_NAME);

        let script = "add Alice 1111111111\n\
                      add Alice 2222222222\n\
                      add-birthday Alice 15.06.1990\n\
                      add Bob 3333333333\n\
                      change Bob 3333333333 4444444444\n\
                      close\n";
        let (first, _) = run_session(FileStorage::new(&path), AddressBook::new(), script).await;

        // Second run starts from whatever the first one saved
        let storage = FileStorage::new(&path);
        let loaded = storage.load().expect("Failed to load book");
        assert_eq!(loaded, first);

        let (_, output) = run_session(storage, loaded, "phone Bob\nall\nexit\n").await;
        assert!(output.contains("Contact Bob, phones: 4444444444"));
        assert!(output.contains("Alice: 1111111111, 2222222222, birthday: 15.06.1990"));
    }

    #[tokio::test]
    async fn test_session_reports_errors_and_keeps_going() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join(DEFAULT_FILE_NAME));

        let script = "phone Ghost\n\
                      add Alice\n\
                      add Alice 12345\n\
                      add Alice 1111111111\n\
                      add-birthday Alice 31.04.2024\n\
                      show-birthday Alice\n\
                      dance\n\
                      hello\n";
        let (book, output) = run_session(storage, AddressBook::new(), script).await;

        assert!(output.contains("Contact Ghost not found."));
        assert!(output.contains("Invalid command format. Usage: add [name] [phone]"));
        assert!(output.contains("Phone number must consist of exactly 10 digits"));
        assert!(output.contains("Date must be in DD.MM.YYYY format"));
        assert!(output.contains("Alice has no birthday set."));
        assert!(output.contains("Unknown command."));
        assert!(output.contains("Hello! How can I help you?"));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_app_starts_empty_without_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = AppConfig::new(temp_dir.path().join("missing.json"));

        let app = AddressBookApp::new(config).expect("Failed to create app");
        assert!(app.book().is_empty());
        assert!(app.startup_notice().unwrap().contains("not found"));
    }

    #[test]
    fn test_app_loads_existing_book() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join(DEFAULT_FILE_NAME);

        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        book.add_record(record);
        FileStorage::new(&path).save(&book).expect("Failed to save");

        let app = AddressBookApp::new(AppConfig::new(&path)).expect("Failed to create app");
        assert_eq!(app.book(), &book);
        assert!(app.startup_notice().is_none());

        let mut fresh = AppConfig::new(&path);
        fresh.fresh = true;
        let app = AddressBookApp::new(fresh).expect("Failed to create app");
        assert!(app.book().is_empty());
    }

    #[test]
    fn test_app_recovers_from_corrupt_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let path = temp_dir.path().join(DEFAULT_FILE_NAME);
        std::fs::write(&path, "{ this is not an address book").unwrap();

        let mut config = AppConfig::new(&path);
        config.color = false;
        let app = AddressBookApp::new(config).expect("Corrupt data should not be fatal");
        assert!(app.book().is_empty());
        assert!(app.startup_notice().unwrap().starts_with("Could not read"));

        // The unreadable data is kept aside instead of being overwritten on save
        let backup = FileStorage::new(&path).backup_path();
        assert!(!path.exists());
        assert_eq!(
            std::fs::read_to_string(&backup).unwrap(),
            "{ this is not an address book"
        );
        assert!(app.startup_notice().unwrap().contains(".bak"));
    }

    #[test]
    fn test_storage_interface() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let storage = FileStorage::new(temp_dir.path().join(DEFAULT_FILE_NAME));

        let _: &dyn BookStorage = &storage;
        assert!(storage.load().unwrap().is_empty());
    }
}
