//! Symbol values.
//!
//! Identity is a process-unique id; the description is informational only.
//! Well-known symbols use fixed ids below `FIRST_USER_SYMBOL_ID`.

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

const FIRST_USER_SYMBOL_ID: u64 = 16;

static NEXT_SYMBOL_ID: AtomicU64 = AtomicU64::new(FIRST_USER_SYMBOL_ID);

#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Option<Cow<'static, str>>,
}

impl Symbol {
    /// `Symbol.iterator`
    pub const ITERATOR: Symbol = Symbol::well_known(1, "Symbol.iterator");
    /// `Symbol.asyncIterator`
    pub const ASYNC_ITERATOR: Symbol = Symbol::well_known(2, "Symbol.asyncIterator");

    const fn well_known(id: u64, description: &'static str) -> Symbol {
        Symbol {
            id,
            description: Some(Cow::Borrowed(description)),
        }
    }

    /// Create a fresh symbol, distinct from every other symbol.
    pub fn new(description: Option<&str>) -> Symbol {
        Symbol {
            id: NEXT_SYMBOL_ID.fetch_add(1, Ordering::Relaxed),
            description: description.map(|d| Cow::Owned(d.to_string())),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_well_known(&self) -> bool {
        self.id < FIRST_USER_SYMBOL_ID
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description().unwrap_or(""))
    }
}
