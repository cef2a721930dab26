//! Table-driven accessors over a fixed field path.
//!
//! A `Lens` is a static description of one field chain: the inlined
//! ancestors from the root inward, then the terminal field. Reads yield the
//! absent marker as soon as an ancestor is unset; writes validate first,
//! then copy the root and create only the ancestors that are missing.


use crate::{error::InvalidArgument, guard::Guard, message::Message, value::Value};

///
/// Step
/// Inlined ancestor: the field name and the message type it holds.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Step<'a> {
    pub field: &'a str,
    pub message: &'a str,
}

impl<'a> Step<'a> {
    #[must_use]
    pub const fn new(field: &'a str, message: &'a str) -> Self {
        Self { field, message }
    }
}

///
/// Terminal
///
/// `guard` validates `set`; `element` is present only for repeated fields
/// and validates a single `add`ed element.
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Terminal<'a> {
    pub field: &'a str,
    pub guard: Guard<'a>,
    pub element: Option<Guard<'a>>,
}

impl<'a> Terminal<'a> {
    #[must_use]
    pub const fn new(field: &'a str, guard: Guard<'a>, element: Option<Guard<'a>>) -> Self {
        Self {
            field,
            guard,
            element,
        }
    }

    #[must_use]
    pub const fn is_repeated(&self) -> bool {
        self.element.is_some()
    }

    /// Absent marker for this terminal: empty sequence when repeated.
    #[must_use]
    pub const fn absent(&self) -> Value {
        if self.is_repeated() {
            Value::List(Vec::new())
        } else {
            Value::Unset
        }
    }
}

///
/// Lens
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Lens<'a> {
    root: &'a str,
    steps: &'a [Step<'a>],
    terminal: Terminal<'a>,
}

impl<'a> Lens<'a> {
    #[must_use]
    pub const fn new(root: &'a str, steps: &'a [Step<'a>], terminal: Terminal<'a>) -> Self {
        Self {
            root,
            steps,
            terminal,
        }
    }

    #[must_use]
    pub const fn steps(&self) -> &'a [Step<'a>] {
        self.steps
    }

    #[must_use]
    pub const fn terminal(&self) -> &Terminal<'a> {
        &self.terminal
    }

    /// Dotted path from the root type, e.g. `Person.address.street`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = self.root.to_string();
        for step in self.steps {
            path.push('.');
            path.push_str(step.field);
        }
        path.push('.');
        path.push_str(self.terminal.field);

        path
    }

    /// Read the terminal value, or the absent marker.
    #[must_use]
    pub fn get(&self, root: &Message) -> Value {
        let mut node = root;
        for step in self.steps {
            match node.get(step.field) {
                Some(Value::Message(child)) => node = child,
                _ => return self.terminal.absent(),
            }
        }

        node.get(self.terminal.field)
            .cloned()
            .unwrap_or_else(|| self.terminal.absent())
    }

    /// Return a copy of `root` with the terminal set to `value`.
    pub fn set(&self, root: &Message, value: Value) -> Result<Message, InvalidArgument> {
        self.check(self.terminal.guard, &value)?;

        let mut next = root.clone();
        self.update(&mut next, self.steps, |slot| *slot = value);

        Ok(next)
    }

    /// Return a copy of `root` with `value` prepended to the terminal sequence.
    pub fn add(&self, root: &Message, value: Value) -> Result<Message, InvalidArgument> {
        let Some(element) = self.terminal.element else {
            return Err(InvalidArgument::not_repeated(self.path()));
        };
        self.check(element, &value)?;

        let mut next = root.clone();
        self.update(&mut next, self.steps, |slot| match slot {
            Value::List(items) => items.insert(0, value),
            slot => *slot = Value::List(vec![value]),
        });

        Ok(next)
    }

    fn check(&self, guard: Guard<'_>, value: &Value) -> Result<(), InvalidArgument> {
        if guard.accepts(value) {
            Ok(())
        } else {
            Err(InvalidArgument::guard(self.path(), guard, value))
        }
    }

    // Apply `write` to the terminal slot below `node`. A missing ancestor, or
    // one holding anything but a message, is replaced by a fresh message.
    fn update(&self, node: &mut Message, steps: &[Step<'_>], write: impl FnOnce(&mut Value)) {
        let Some((step, rest)) = steps.split_first() else {
            write(node.slot_mut(self.terminal.field));
            return;
        };

        let slot = node.slot_mut(step.field);
        if let Value::Message(child) = &mut *slot {
            self.update(child, rest, write);
        } else {
            let mut child = Message::new(step.message);
            self.update(&mut child, rest, write);
            *slot = Value::Message(child);
        }
    }
}
