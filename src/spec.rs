//! Pepon Format Specification
//!
//! This module documents the Pepon configuration format as implemented by
//! this library.
//!
//! # Overview
//!
//! Pepon is a human-editable, typed configuration text format. Named,
//! typed values live under bracketed group headers; three comment dialects
//! are accepted; strings and containers may span multiple lines. The
//! format is line-oriented: a document is a sequence of newline-terminated
//! records, and each line is classified on its own after trimming.
//!
//! ## Design Philosophy
//!
//! - **Explicit typing**: every value names its type, so a reader never
//!   guesses whether `1` is a number, a flag, or text
//! - **Whitespace freedom**: indentation and spacing around `:`, `=`,
//!   `<`, `>`, braces, and quotes carry no meaning
//! - **Editor friendliness**: comments in the dialect your team already
//!   writes (`//`, `--`, or `#`)
//!
//! # Core Syntax
//!
//! ## Groups
//!
//! A group header is a name in square brackets. Every value belongs to the
//! most recent group; a value before the first header is an error.
//!
//! ```text
//! [Window]
//! width : uint = 1280
//! height : uint = 720
//! ```
//!
//! Group names are trimmed and may contain spaces. Duplicate group names
//! are rejected.
//!
//! ## Comments
//!
//! Comment lines start with `//`, `--`, or `#`. Dialects may be mixed
//! freely. Consecutive comment lines preceding a group header become that
//! group's comment block and are written back out when printing:
//!
//! ```text
//! // C and C++ style
//! -- Lua style
//! # Python style
//! [Commented group]
//! ```
//!
//! ## Scalar values
//!
//! `name : type = value`, one per line:
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Signed integer | `int` | `a : int = -3` |
//! | Unsigned integer | `uint` or `unsigned int` | `b : uint = 10` |
//! | Boolean | `bool` | `c : bool = true` |
//! | Single-precision float | `float` | `d : float = 2.5` |
//! | Double-precision float | `double` | `e : double = 1e-3` |
//! | UTF-8 string | `string` | `f : string = "hello"` |
//!
//! Type names are case-insensitive. `true` and `1` both read as true;
//! every other boolean token reads as false. Malformed `int`/`uint` text
//! yields zero; malformed `float`/`double` text is a fatal error.
//!
//! ## Strings
//!
//! Single-line strings take the text strictly between the first and last
//! double quote. A string whose closing quote appears on a later line is a
//! multi-line string; embedded line breaks and blank lines are preserved:
//!
//! ```text
//! greeting : string = "This is a very,
//! very long
//! string
//! "
//! ```
//!
//! Quotation marks on a value whose declared type is not `string` are a
//! fatal error.
//!
//! ## Containers
//!
//! A container is a homogeneous sequence with an explicit element type:
//! `name : kind<type> = { v1, v2, ... }`. Three kinds exist — `vector`
//! (random access), `deque` and `list` (sequential) — all sharing this one
//! wire form. A container whose `}` appears on a later line spans multiple
//! lines:
//!
//! ```text
//! primes : vector<int> = { 2, 3, 5, 7 }
//! d : deque<uint> = { 10, 20,
//!                     30, 40,
//!                     50, 60 }
//! ```
//!
//! Elements split on commas; string elements may be quoted with `'` or
//! `"` to protect embedded commas. `vector<bool>` is unsupported;
//! `deque<bool>` and `list<bool>` are fine.
//!
//! # Grammar
//!
//! ```text
//! comment       := ("//" | "--" | "#") text
//! group         := "[" name "]"
//! scalar-assign := name ":" type "=" value
//! container-1l  := name ":" kind "<" type ">" "=" "{" v1 "," v2 "," ... "}"
//! container-ml  := name ":" kind "<" type ">" "=" "{" ...lines... "}"
//! string-ml     := name ":" "string" "=" '"' ...lines... '"'
//! ```
//!
//! # Errors
//!
//! Fatal, parse-aborting errors: a `[` without a `]`, an assignment with
//! no `:` before the `=`, a closing `}` with no opener, a malformed or
//! unknown `kind<type>` annotation, an unknown declared type, quotes on a
//! non-string declaration, a duplicate group name, and a value before any
//! group. A multi-line block still open at end of input is discarded
//! silently.
//!
//! # Printing
//!
//! Printing walks groups in declaration order, one blank line between
//! groups. The document-wide quoting preference wraps every value and
//! container element in a configurable quote character (default `'`);
//! string scalars always print inside double quotes. Note that quoted
//! numeric output does not re-parse as numbers — disable quoting for
//! documents meant to round-trip.
