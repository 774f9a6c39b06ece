/*!
 * File Store Tests
 * Create, write, read, delete and capacity limits
 */

use pretty_assertions::assert_eq;
use simpleos_kernel::vfs::FileStore;
use simpleos_kernel::FsError;

#[test]
fn test_write_then_read() {
    let mut fs = FileStore::with_capacity(20);

    fs.create("hello.txt").unwrap();
    assert_eq!(fs.write("hello.txt", b"Hello, World!").unwrap(), 13);

    let contents = fs.read("hello.txt").unwrap();
    assert_eq!(contents.size, 13);
    assert_eq!(contents.data, b"Hello, World!".to_vec());
    assert_eq!(contents.to_string_lossy(), "Hello, World!");

    let listing = fs.list();
    assert_eq!(listing.len(), 1);
    assert_eq!(listing[0].filename, "hello.txt");
    assert_eq!(listing[0].size, 13);
}

#[test]
fn test_delete_then_recreate_starts_empty() {
    let mut fs = FileStore::with_capacity(20);
    fs.create("a").unwrap();
    fs.write("a", b"hello").unwrap();

    let contents = fs.read("a").unwrap();
    assert_eq!(contents.size, 5);
    assert_eq!(contents.data, b"hello".to_vec());

    fs.delete("a").unwrap();
    assert_eq!(fs.read("a"), Err(FsError::NotFound("a".into())));

    fs.create("a").unwrap();
    assert_eq!(fs.read("a").unwrap().size, 0);
}

#[test]
fn test_new_file_is_empty() {
    let mut fs = FileStore::with_capacity(4);
    fs.create("empty").unwrap();

    let contents = fs.read("empty").unwrap();
    assert!(contents.is_empty());
    assert!(contents.data.is_empty());

    let info = &fs.list()[0];
    assert_eq!(info.created_at, info.modified_at);
}

#[test]
fn test_overwrite_replaces_content() {
    let mut fs = FileStore::with_capacity(4);
    fs.create("notes").unwrap();

    fs.write("notes", b"a much longer first draft").unwrap();
    fs.write("notes", b"ok").unwrap();

    let contents = fs.read("notes").unwrap();
    assert_eq!(contents.size, 2);
    assert_eq!(contents.data, b"ok".to_vec());
}

#[test]
fn test_write_size_limit() {
    let mut fs = FileStore::with_capacity(4);
    fs.create("big").unwrap();
    fs.write("big", b"keep me").unwrap();
    let before = fs.list();

    let err = fs.write("big", &[b'x'; 1024]).unwrap_err();
    assert_eq!(err, FsError::TooLarge { len: 1024, max: 1023 });

    // A rejected write leaves content and timestamps alone
    assert_eq!(fs.list(), before);
    assert_eq!(fs.read("big").unwrap().data, b"keep me".to_vec());

    assert_eq!(fs.write("big", &[b'y'; 1023]).unwrap(), 1023);
    assert_eq!(fs.read("big").unwrap().size, 1023);
}

#[test]
fn test_custom_buffer_size() {
    let mut fs = FileStore::with_limits(2, 8);
    assert_eq!(fs.max_write(), 7);

    fs.create("tiny").unwrap();
    assert_eq!(fs.write("tiny", b"1234567").unwrap(), 7);
    assert_eq!(
        fs.write("tiny", b"12345678"),
        Err(FsError::TooLarge { len: 8, max: 7 })
    );
}

#[test]
fn test_duplicate_create() {
    let mut fs = FileStore::with_capacity(4);
    fs.create("dup").unwrap();

    let err = fs.create("dup").unwrap_err();
    assert_eq!(err, FsError::AlreadyExists("dup".into()));
    assert_eq!(err.to_string(), "File 'dup' already exists!");
    assert_eq!(fs.len(), 1);
}

#[test]
fn test_table_full() {
    let mut fs = FileStore::with_capacity(20);
    for i in 0..20 {
        fs.create(&format!("file{}", i)).unwrap();
    }

    assert_eq!(
        fs.create("one-too-many"),
        Err(FsError::TableFull { capacity: 20 })
    );

    // Duplicate is reported before Full
    assert_eq!(
        fs.create("file0"),
        Err(FsError::AlreadyExists("file0".into()))
    );
}

#[test]
fn test_missing_files() {
    let mut fs = FileStore::with_capacity(4);
    let missing = || FsError::NotFound("ghost".into());

    assert_eq!(fs.read("ghost").unwrap_err(), missing());
    assert_eq!(fs.write("ghost", b"boo").unwrap_err(), missing());
    assert_eq!(fs.delete("ghost").unwrap_err(), missing());
}

#[test]
fn test_delete_and_recreate() {
    let mut fs = FileStore::with_capacity(4);
    fs.create("tmp").unwrap();
    fs.write("tmp", b"secret").unwrap();

    fs.delete("tmp").unwrap();
    assert!(!fs.exists("tmp"));
    assert!(fs.is_empty());

    fs.create("tmp").unwrap();
    assert!(fs.read("tmp").unwrap().is_empty());
}

#[test]
fn test_list_follows_slot_order() {
    let mut fs = FileStore::with_capacity(4);
    for name in ["a", "b", "c"] {
        fs.create(name).unwrap();
    }
    fs.delete("a").unwrap();
    fs.create("d").unwrap();

    let names: Vec<_> = fs.list().into_iter().map(|f| f.filename).collect();
    assert_eq!(names, vec!["d", "b", "c"]);
}

#[test]
fn test_long_filenames_match_on_lookup() {
    let mut fs = FileStore::with_capacity(4);
    let long = format!("{}.txt", "n".repeat(40));

    fs.create(&long).unwrap();
    fs.write(&long, b"data").unwrap();

    assert_eq!(fs.read(&long).unwrap().size, 4);
    assert_eq!(fs.list()[0].filename.len(), 31);
}
