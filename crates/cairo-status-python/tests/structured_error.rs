//! Tests for the `Error` exception type and the `Status` enum.

use _cairo_status::{CairoError, status_type, wrap_status};
use cairo_status::Status;
use pretty_assertions::assert_eq;
use pyo3::{
    exceptions::{PyException, PyTypeError, PyValueError},
    prelude::*,
    types::PyDict,
};

/// Globals with `Error` and `Status` bound, for running Python snippets.
fn globals(py: Python<'_>) -> Bound<'_, PyDict> {
    let globals = PyDict::new(py);
    globals.set_item("Error", py.get_type::<CairoError>()).unwrap();
    globals.set_item("Status", status_type(py).unwrap()).unwrap();
    globals
}

// =============================================================================
// 1. Construction
// =============================================================================

#[test]
fn status_comes_from_second_argument() {
    Python::attach(|py| {
        let exc = py.get_type::<CairoError>().call1(("boom", 42)).unwrap();
        assert_eq!(exc.getattr("status").unwrap().extract::<i32>().unwrap(), 42);
        assert_eq!(exc.getattr("args").unwrap().extract::<(String, i32)>().unwrap(), ("boom".to_owned(), 42));
    });
}

#[test]
fn status_defaults_to_none() {
    Python::attach(|py| {
        let exc = py.get_type::<CairoError>().call1(("boom",)).unwrap();
        assert!(exc.getattr("status").unwrap().is_none());

        let exc = py.get_type::<CairoError>().call0().unwrap();
        assert!(exc.getattr("status").unwrap().is_none());
    });
}

#[test]
fn status_follows_args_stored_by_subclass_init() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
class Sub(Error):
    def __init__(self, code):
        super().__init__('custom', code)

e = Sub(7)
assert e.args == ('custom', 7), e.args
assert e.status == 7, e.status
assert str(e) == 'custom'
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

#[test]
fn reinitialising_rederives_status() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
e = Error('a', 1)
e.__init__('b', 2)
assert e.args == ('b', 2), e.args
assert e.status == 2, e.status
e.__init__('c')
assert e.status is None
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

#[test]
fn is_an_exception_and_subclassable() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
class Sub(Error):
    pass

try:
    raise Sub('sub', 3)
except Error as e:
    caught = e

assert isinstance(caught, Exception)
assert caught.status == 3
assert str(caught) == 'sub'
",
            Some(&globals),
            None,
        )
        .unwrap();
        let exc = py.get_type::<CairoError>().call1(("x",)).unwrap();
        assert!(exc.is_instance_of::<PyException>());
    });
}

// =============================================================================
// 2. String conversion
// =============================================================================

#[test]
fn str_is_just_the_message() {
    Python::attach(|py| {
        let exc = py.get_type::<CairoError>().call1(("boom", 42)).unwrap();
        assert_eq!(exc.str().unwrap().to_string(), "boom");

        let exc = py.get_type::<CairoError>().call1((5,)).unwrap();
        assert_eq!(exc.str().unwrap().to_string(), "5");
    });
}

#[test]
fn str_without_args_falls_back_to_base() {
    Python::attach(|py| {
        let exc = py.get_type::<CairoError>().call0().unwrap();
        assert_eq!(exc.str().unwrap().to_string(), "");
    });
}

// =============================================================================
// 3. The status attribute
// =============================================================================

#[test]
fn status_can_be_replaced() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
e = Error('boom', 42)
e.status = 'other'
assert e.status == 'other'
e.status = None
assert e.status is None
e.status = Status.NO_MEMORY
assert e.status == 1
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

#[test]
fn replacing_status_releases_old_value() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
import weakref

class Payload:
    pass

e = Error('boom')
payload = Payload()
e.status = payload
ref = weakref.ref(payload)
del payload
assert ref() is not None
e.status = 2
assert ref() is None
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

#[test]
fn status_cannot_be_deleted() {
    Python::attach(|py| {
        let exc = py.get_type::<CairoError>().call1(("boom", 42)).unwrap();
        let err = exc.delattr("status").unwrap_err();
        assert!(err.is_instance_of::<PyTypeError>(py));
        assert_eq!(err.value(py).str().unwrap().to_string(), "Cannot delete attribute");
        assert_eq!(exc.getattr("status").unwrap().extract::<i32>().unwrap(), 42);
    });
}

#[test]
fn other_attributes_keep_base_behaviour() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
e = Error('boom', 42)
e.note = 'extra'
assert e.note == 'extra'
del e.note
assert not hasattr(e, 'note')
e.args = ('changed',)
assert str(e) == 'changed'
assert e.status == 42
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

// =============================================================================
// 4. Cyclic garbage collection
// =============================================================================

#[test]
fn cycle_through_status_is_collected() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
import gc

collected = []

class Marker:
    def __del__(self):
        collected.append(True)

e = Error('boom', None)
e.status = [e, Marker()]
del e
gc.collect()
assert collected == [True], collected
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

// =============================================================================
// 5. Status
// =============================================================================

#[test]
fn status_members_are_int_compatible() {
    Python::attach(|py| {
        let globals = globals(py);
        py.run(
            c"
assert Status.NO_MEMORY == 1
assert int(Status.INVALID_RESTORE) == 2
assert Status(3) == Status.INVALID_POP_GROUP
assert hash(Status.WRITE_ERROR) == hash(11)
assert Status.SUCCESS.name == 'SUCCESS'
assert Status.SUCCESS.value == 0
assert repr(Status.NO_MEMORY) == '<Status.NO_MEMORY: 1>'
assert [10, 20][Status.SUCCESS] == 10
assert isinstance(Status.NO_MEMORY, int)
assert Status.NO_MEMORY + 1 == 2
assert Status.INVALID_RESTORE * 2 == 4
assert Status.NO_MEMORY != 'NO_MEMORY'
",
            Some(&globals),
            None,
        )
        .unwrap();
    });
}

#[test]
fn unknown_status_value_is_rejected() {
    Python::attach(|py| {
        let err = status_type(py).unwrap().call1((99,)).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
    });
}

#[test]
fn wrap_status_reuses_members() {
    Python::attach(|py| {
        let wrapped = wrap_status(py, Status::InvalidDash.code()).unwrap();
        let member = status_type(py).unwrap().getattr("INVALID_DASH").unwrap();
        assert_eq!(wrapped.as_ptr(), member.as_ptr());
        assert_eq!(wrapped.extract::<i32>().unwrap(), Status::InvalidDash.code());

        let unknown = wrap_status(py, -5).unwrap();
        assert_eq!(unknown.extract::<i32>().unwrap(), -5);
    });
}
