#![doc = r#"
iconset — generate a set of Lanczos-resampled icons from one source image.

The crate loads a single image, resizes it to a list of exact target sizes with a
Lanczos3 filter and writes each copy to its own file, inferring the output format
from the file extension. The default plan reads `icon512.png` and writes
`icon16.png`, `icon48.png` and `icon128.png` in the working directory. It powers
the `iconset` CLI and can be embedded in your own Rust applications.

Quick start: the default icon set
---------------------------------
```rust,no_run
fn main() -> iconset::Result<()> {
    let report = iconset::generate_default_icon_set()?;
    for out in &report.outputs {
        println!("{} {}x{}", out.path.display(), out.width, out.height);
    }
    Ok(())
}
```

Custom plan
-----------
```rust,no_run
use iconset::{generate_icon_set, IconSetParams, TargetSize};

fn main() -> iconset::Result<()> {
    let sizes = [TargetSize::square(32)?, TargetSize::new(64, 48)?];
    let params = IconSetParams::from_layout("logo.png", "build/icons", "logo", &sizes);
    // writes build/icons/logo32.png and build/icons/logo64x48.png
    generate_icon_set(&params)?;
    Ok(())
}
```

In-memory resize
----------------
```rust,no_run
use std::path::Path;
use iconset::{resize_to_buffer, TargetSize};

fn main() -> iconset::Result<()> {
    let img = resize_to_buffer(Path::new("icon512.png"), TargetSize::square(16)?)?;
    assert_eq!((img.width(), img.height()), (16, 16));
    Ok(())
}
```

Error handling
--------------
All public functions return `iconset::Result<T>`; match on `iconset::Error` to
handle specific cases.

```rust,no_run
use iconset::{generate_default_icon_set, Error};

fn main() {
    match generate_default_icon_set() {
        Ok(_) => {}
        Err(Error::Io(e)) => eprintln!("I/O error: {e}"),
        Err(Error::Image(e)) => eprintln!("Image error: {e}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points and report types.
- [`types`] — `TargetSize` and `ColorMode`.
- [`io`] — source decoding and output encoding.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

pub use crate::core::params::{DEFAULT_INPUT, DEFAULT_PREFIX, IconSetParams, OutputSpec};
pub use error::{Error, Result};
pub use types::{ColorMode, DEFAULT_SIZES, TargetSize};

pub use api::{
    IconSetReport, ImageInfo, generate_default_icon_set, generate_icon_set, resize_to_buffer,
};
