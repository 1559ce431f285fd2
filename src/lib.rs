#![doc = r#"
CSVTALLY — a streaming CSV field counter.

This crate counts the total number of fields across all records of a CSV
input in a single pass, without buffering the file or retaining records.
It powers the `csvtally` CLI and can be embedded in your own Rust
applications.

Quick start: count a file
-------------------------
```rust,no_run
use std::path::Path;
use csvtally::count_file;

fn main() -> csvtally::Result<()> {
    let total = count_file(Path::new("/data/rows.csv"))?;
    println!("count: {total}");
    Ok(())
}
```

Count from any reader
---------------------
```rust
use csvtally::count_fields;

fn main() -> csvtally::Result<()> {
    let total = count_fields("a,\"b,c\",d\n".as_bytes())?;
    assert_eq!(total, 3);
    Ok(())
}
```

CSV dialect
-----------
Input is parsed with the `csv` crate's default RFC 4180-style dialect:
comma delimiters, double-quote quoting with doubled-quote escaping, and
`\n` or `\r\n` record separators. Header rows are counted like any other
record, and records may have varying field counts.

Error handling
--------------
All public functions return `csvtally::Result<T>`; match on
`csvtally::Error` to handle specific cases.

```rust,no_run
use std::path::Path;
use csvtally::{count_file, Error};

fn main() {
    match count_file(Path::new("/bad/path.csv")) {
        Ok(total) => println!("count: {total}"),
        Err(Error::Open { path, source }) => eprintln!("open {path:?}: {source}"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`count`] — the streaming counter.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod count;
pub mod error;

// Curated public API surface
pub use count::{count_fields, count_file};
pub use error::{Error, Result};
