//! # External solver variables
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::data::indexed_map::Identified;

/// Source of unique variable ids, shared by all solvers in the process.
static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

/// A real-valued unknown in a constraint system.
///
/// A `Variable` is a cheap-clone handle: clones refer to the same underlying
/// unknown, and equality and hashing go by the stable id assigned at
/// creation, never by name or value. Variables outlive any solver they are
/// used with; removing every constraint that mentions one does not invalidate
/// it.
///
/// The stored value is the last solution computed for this variable. It is
/// written by [`Solver::update_variables`](crate::Solver::update_variables)
/// and defaults to 0 until then.
#[derive(Clone)]
pub struct Variable {
    inner: Rc<VariableData>,
}

struct VariableData {
    id: usize,
    name: RefCell<String>,
    value: Cell<f64>,
    context: RefCell<Option<Rc<dyn Any>>>,
}

impl Variable {
    /// Create a new anonymous variable.
    pub fn new() -> Self {
        Self::named(String::new())
    }

    /// Create a new variable with a display name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(VariableData {
                id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
                name: RefCell::new(name.into()),
                value: Cell::new(0f64),
                context: RefCell::new(None),
            }),
        }
    }

    /// The display name. Empty for anonymous variables.
    pub fn name(&self) -> String {
        self.inner.name.borrow().clone()
    }

    /// Change the display name. Identity is unaffected.
    pub fn set_name(&self, name: impl Into<String>) {
        *self.inner.name.borrow_mut() = name.into();
    }

    /// The last value computed for this variable.
    pub fn value(&self) -> f64 {
        self.inner.value.get()
    }

    /// Overwrite the stored value.
    ///
    /// The solver calls this when publishing a solution; callers should treat
    /// it as solver-internal, since any value written here is overwritten by
    /// the next [`Solver::update_variables`](crate::Solver::update_variables).
    pub fn set_value(&self, value: f64) {
        self.inner.value.set(value);
    }

    /// The opaque user context attached to this variable, if any.
    pub fn context(&self) -> Option<Rc<dyn Any>> {
        self.inner.context.borrow().clone()
    }

    /// Attach an opaque user context. The solver never looks at it.
    pub fn set_context(&self, context: Rc<dyn Any>) {
        *self.inner.context.borrow_mut() = Some(context);
    }
}

impl Default for Variable {
    fn default() -> Self {
        Self::new()
    }
}

impl Identified for Variable {
    fn id(&self) -> usize {
        self.inner.id
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.inner.id == other.inner.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.id.hash(state);
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = self.inner.name.borrow();
        if name.is_empty() {
            write!(f, "v{}", self.inner.id)
        } else {
            write!(f, "{}", name)
        }
    }
}

impl fmt::Debug for Variable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Variable")
            .field("id", &self.inner.id)
            .field("name", &*self.inner.name.borrow())
            .field("value", &self.inner.value.get())
            .finish()
    }
}
