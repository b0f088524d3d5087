use staffbook_core::{
    EmployeeFields, PersistError, RosterService, ServiceError, StoreError,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn roster_file(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("employees.csv");
    fs::write(&path, contents).unwrap();
    path
}

fn fields(first: &str, last: &str, email: &str, wage: f64) -> EmployeeFields {
    EmployeeFields {
        first_name: first.to_string(),
        last_name: last.to_string(),
        email: email.to_string(),
        hourly_wage: wage,
    }
}

#[test]
fn open_missing_file_is_a_read_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.csv");

    let err = RosterService::open(missing).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Persist(PersistError::Read { .. })
    ));
}

#[test]
fn open_rejects_malformed_wage() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,twenty\n");

    let err = RosterService::open(path).unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Store(StoreError::InvalidRow { row: 0, .. })
    ));
}

#[test]
fn load_then_save_reproduces_the_file_byte_for_byte() {
    let dir = TempDir::new().unwrap();
    let contents = "1,Ann,Lee,a@x,20\n2,Bo,Ng,b@x,15.5\n";
    let path = roster_file(&dir, contents);

    let service = RosterService::open(&path).unwrap();
    service.save().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), contents);
}

#[test]
fn blank_lines_are_dropped_on_load_and_normalized_on_save() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n\n2,Bo,Ng,b@x,15\n");

    let service = RosterService::open(&path).unwrap();
    assert_eq!(service.list().len(), 2);

    service.save().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Ann,Lee,a@x,20\n2,Bo,Ng,b@x,15\n"
    );
}

#[test]
fn carriage_return_line_endings_load_and_save_as_plain_newlines() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\r\n2,Bo,Ng,b@x,15\r\n");

    let service = RosterService::open(&path).unwrap();
    assert_eq!(service.list().len(), 2);

    service.save().unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Ann,Lee,a@x,20\n2,Bo,Ng,b@x,15\n"
    );
}

#[test]
fn add_allocates_the_smallest_free_id_and_persists() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n3,Cy,Ott,c@x,18\n");

    let mut service = RosterService::open(&path).unwrap();
    let id = service.add(fields("Bo", "Ng", "b@x", 15.5)).unwrap();
    assert_eq!(id, 2);
    service.save().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "1,Ann,Lee,a@x,20\n3,Cy,Ott,c@x,18\n2,Bo,Ng,b@x,15.5\n"
    );
}

#[test]
fn update_and_remove_survive_a_reload() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n2,Bo,Ng,b@x,15\n");

    let mut service = RosterService::open(&path).unwrap();
    service
        .update(1, fields("Anna", "Leigh", "anna@x", 22.5))
        .unwrap();
    service.remove(2).unwrap();
    service.save().unwrap();

    let reloaded = RosterService::open(&path).unwrap();
    assert_eq!(reloaded.list().len(), 1);
    let survivor = reloaded.get(1).unwrap();
    assert_eq!(survivor.full_name(), "Anna Leigh");
    assert_eq!(survivor.hourly_wage, 22.5);
    assert!(reloaded.get(2).is_none());
}

#[test]
fn not_found_surfaces_through_the_service() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "1,Ann,Lee,a@x,20\n");

    let mut service = RosterService::open(&path).unwrap();
    let err = service.remove(9).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(service.list().len(), 1);
}

#[test]
fn empty_file_opens_as_an_empty_roster() {
    let dir = TempDir::new().unwrap();
    let path = roster_file(&dir, "");

    let service = RosterService::open(&path).unwrap();
    assert!(service.list().is_empty());

    service.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}
