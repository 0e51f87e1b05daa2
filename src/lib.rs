//! # memit
//!
//! Turn markdown notes into a tree of sections and pull code chunks out of them.
//!
//! A file becomes a root section titled after the file; every heading beneath it
//! becomes a nested section whose `level` counts structural depth. A directory
//! becomes a root whose children are its notes and subdirectories. From any
//! section's content a [`chunk::Chunk`] can be extracted: the body of a fenced code
//! block and the prose prompt before it.
//!
//! ```rust
//! use memit::chunk::{extract, ChunkKind};
//! use memit::parser::parse_str;
//!
//! let tree = parse_str("notes", "# Sorting\nHow do you sort?\n```r\nsort(x)\n```\n").unwrap();
//! let sorting = tree.get(1).unwrap();
//! let chunk = extract(&sorting.content, &sorting.title, ChunkKind::Code);
//! assert_eq!(chunk.content(), Some("sort(x)"));
//! assert_eq!(chunk.prompt(), Some("How do you sort?"));
//! ```

pub mod chunk;
pub mod config;
pub mod error;
pub mod formats;
pub mod graph;
pub mod input;
pub mod parser;
pub mod section;

pub use chunk::{Chunk, ChunkKind};
pub use error::{Error, Result};
pub use graph::{to_graph, GraphExport};
pub use parser::{parse_directory, parse_file, parse_str};
pub use section::{Section, SectionTree};
