#![doc = r#"
yabc — yet another base converter.

This crate re-renders an unsigned integer (anything that fits in a `u64`) from
one radix to another. Radices 2 through 36 are supported; digit values 10–35
are written as letters, in lowercase by default or uppercase on request. It
powers the `yabc` command-line tool and can be embedded in your own Rust
applications.

Base tokens
-----------
A base is named by a token ("tip") that is either an integer literal in C
notation (`16`, `0x10`, `020`) or one of the mnemonics `hex`, `dec`, `oct`,
`bin` (any letter case). Resolution and range checking are separate steps:
[`resolve_base_tip`] returns whatever integer the token denotes, and
[`resolve_radix`] additionally requires it to be a supported [`Radix`].

```rust
use yabc::{resolve_base_tip, resolve_radix, BaseTip, Radix};

assert_eq!(resolve_base_tip("HEX"), BaseTip::Resolved(16));
assert_eq!(resolve_base_tip("1"), BaseTip::Resolved(1));
assert_eq!(resolve_base_tip("abc"), BaseTip::Unrecognized);

assert_eq!(resolve_radix("0x10").unwrap(), Radix::HEXADECIMAL);
assert!(resolve_radix("1").is_err());
```

Quick start: convert a number
-----------------------------
```rust
use yabc::{convert, LetterCase};

fn main() -> yabc::Result<()> {
    assert_eq!(convert("16", "2", "ff", LetterCase::Lower)?, "11111111");
    assert_eq!(convert("dec", "hex", "255", LetterCase::Upper)?, "FF");
    Ok(())
}
```

Rendering without allocation
----------------------------
[`write_in_radix`] writes into any `fmt::Write` sink using a fixed stack
buffer; [`InRadix`] wraps it as a `Display` value.

```rust
use yabc::{InRadix, LetterCase, Radix};

let radix = Radix::new(36).unwrap();
println!("{}", InRadix::new(radix, u64::MAX, LetterCase::Lower));
```

Error handling
--------------
All fallible functions return `yabc::Result<T>`. The `Display` text of each
[`Error`] variant is the one-line diagnostic the CLI prints.

```rust
use yabc::{convert, Error, LetterCase};

match convert("10", "10", "99999999999999999999", LetterCase::Lower) {
    Err(Error::TargetOutOfRange) => {}
    other => panic!("unexpected: {other:?}"),
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — base resolution, target parsing, and radix rendering.
- [`types`] — `Radix`, `LetterCase`, `BaseTip`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::ConversionParams;
pub use error::{Error, Result};
pub use types::{BaseTip, LetterCase, MAX_RADIX, MIN_RADIX, Radix};

// Building blocks
pub use crate::core::base::resolve_base_tip;
pub use crate::core::render::{InRadix, render_in_radix, write_in_radix};
pub use crate::core::target::parse_target;

// High-level API re-exports
pub use api::{convert, convert_with, resolve_radix};
