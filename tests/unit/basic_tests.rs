/// Basic unit tests to verify core functionality through the public API
use address_book::*;
use chrono::NaiveDate;

#[cfg(test)]
mod basic_unit_tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_phone_validation() {
        for good in ["0000000000", "0501234567", "9999999999"] {
            let phone = PhoneNumber::new(good).unwrap();
            assert_eq!(phone.as_str(), good);
        }
        for bad in ["", "050123456", "05012345678", "050-123-456", "+050123456", "abcdefghij"] {
            assert!(matches!(
                PhoneNumber::new(bad),
                Err(DomainError::InvalidPhone { .. })
            ));
        }
    }

    #[test]
    fn test_birthday_validation() {
        assert_eq!(Birthday::parse("29.02.2024").unwrap().to_string(), "29.02.2024");
        assert!(matches!(
            Birthday::parse("31.04.2024"),
            Err(DomainError::InvalidBirthday { .. })
        ));
    }

    #[test]
    fn test_record_lifecycle() {
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("1111111111").unwrap();
        record.add_phone("2222222222").unwrap();
        assert_eq!(record.phones().len(), 2);

        assert!(!record.edit_phone("9999999999", "3333333333").unwrap());
        assert!(record.edit_phone("1111111111", "3333333333").unwrap());
        assert_eq!(record.phones_display(), "3333333333, 2222222222");

        record.set_birthday("15.06.1990").unwrap();
        assert_eq!(record.display_birthday(), "15.06.1990");
        assert_eq!(record.to_string(), "Alice: 3333333333, 2222222222, birthday: 15.06.1990");
    }

    #[test]
    fn test_book_lookup_and_delete() {
        let mut book = AddressBook::new();
        book.add_record(Record::new("Alice").unwrap());

        assert!(book.find("Alice").is_ok());
        assert!(matches!(
            book.find("Bob"),
            Err(DomainError::ContactNotFound { .. })
        ));
        assert!(!book.delete("Bob"));
        assert!(book.delete("Alice"));
    }

    #[test]
    fn test_upcoming_birthdays_scenario() {
        let mut book = AddressBook::new();
        for (name, birthday) in [
            ("Alice", Some("15.06.1990")),
            ("Bob", Some("16.06.1985")),
            ("Carol", Some("20.06.2000")),
            ("Dave", None),
        ] {
            let mut record = Record::new(name).unwrap();
            if let Some(b) = birthday {
                record.set_birthday(b).unwrap();
            }
            book.add_record(record);
        }

        let upcoming = book.upcoming_birthdays(date(2024, 6, 10));
        let rendered: Vec<(String, String)> = upcoming
            .iter()
            .map(|u| (u.name.clone(), u.formatted_date()))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("Alice".to_string(), "2024.06.17".to_string()),
                ("Bob".to_string(), "2024.06.17".to_string()),
            ]
        );
    }

    #[test]
    fn test_year_rollover() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Frank").unwrap();
        record.set_birthday("02.01.1990").unwrap();
        book.add_record(record);

        let upcoming = book.upcoming_birthdays(date(2024, 12, 30));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].congratulation_date, date(2025, 1, 2));
    }

    #[test]
    fn test_codec_round_trip() {
        let mut book = AddressBook::new();
        let mut record = Record::new("Alice").unwrap();
        record.add_phone("1111111111").unwrap();
        record.set_birthday("01.01.2001").unwrap();
        book.add_record(record);
        book.add_record(Record::new("Bob").unwrap());

        let restored = decode(&encode(&book).unwrap()).unwrap();
        assert_eq!(restored, book);
        assert!(decode(b"\x00\x01").unwrap_err().is_corrupt_data());
    }

    #[test]
    fn test_registry_dispatch() {
        let registry = CommandRegistry::standard();
        let mut book = AddressBook::new();

        registry.dispatch("add", &["Alice", "1111111111"], &mut book).unwrap();
        registry.dispatch("add-birthday", &["Alice", "15.06.1990"], &mut book).unwrap();
        assert_eq!(
            registry.dispatch("show-birthday", &["Alice"], &mut book).unwrap(),
            "Alice's birthday: 15.06.1990"
        );
        assert!(matches!(
            registry.dispatch("change", &["Alice", "1111111111"], &mut book),
            Err(CommandError::MissingArguments { expected: 3, got: 2, .. })
        ));
    }
}
