use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

/// Writeable buffer that keeps everything written to it. Used in tests to
/// capture an environment's output stream.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    inner: Rc<RefCell<Vec<u8>>>,
}

impl SharedBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bytes(&self) -> Vec<u8> {
        self.inner.borrow().clone()
    }

    pub fn string(&self) -> String {
        String::from_utf8(self.bytes()).expect("output was not valid utf-8")
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> Result<usize, io::Error> {
        self.inner.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> Result<(), io::Error> {
        self.inner.borrow_mut().flush()
    }
}
