extern crate std;
use super::*;
use crate::read::Error;

const DATA: &[u8] = b"0123456789";

#[test]
fn slice_read_and_peek() {
    let mut t = SliceTokenizer::new(DATA);
    let mut buf = [0u8; 3];

    t.peek_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"012");
    assert_eq!(t.position(), 0);

    t.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"012");
    assert_eq!(t.position(), 3);

    t.ignore(4).unwrap();
    assert_eq!(t.position(), 7);
    assert_eq!(t.remaining(), b"789");
}

#[test]
fn slice_truncated() {
    let mut t = SliceTokenizer::new(DATA);
    t.ignore(8).unwrap();

    let mut buf = [0u8; 4];
    assert_eq!(
        t.peek_exact(&mut buf),
        Err(Error::TruncatedStream {
            needed: 4,
            position: 8
        })
    );
    assert_eq!(
        t.read_exact(&mut buf),
        Err(Error::TruncatedStream {
            needed: 4,
            position: 8
        })
    );
    assert_eq!(
        t.ignore(3),
        Err(Error::TruncatedStream {
            needed: 3,
            position: 8
        })
    );
    assert_eq!(
        t.ignore(u64::MAX),
        Err(Error::TruncatedStream {
            needed: u64::MAX,
            position: 8
        })
    );
    t.ignore(2).unwrap();
    assert_eq!(t.position(), 10);
}

/// Hands out at most `step` bytes per `read` call, like a socket would.
struct Trickle<'a> {
    data: &'a [u8],
    step: usize,
}

impl<'a> std::io::Read for Trickle<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = core::cmp::min(core::cmp::min(self.step, buf.len()), self.data.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        return Ok(n);
    }
}

#[test]
fn reader_peek_then_read() {
    let mut t = ReaderTokenizer::new(Trickle { data: DATA, step: 2 });

    let mut small = [0u8; 2];
    t.peek_exact(&mut small).unwrap();
    assert_eq!(&small, b"01");

    let mut big = [0u8; 5];
    t.peek_exact(&mut big).unwrap();
    assert_eq!(&big, b"01234");
    assert_eq!(t.position(), 0);

    let mut buf = [0u8; 3];
    t.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"012");
    assert_eq!(t.position(), 3);

    // Partly served from the peek buffer, partly from the reader.
    let mut buf = [0u8; 4];
    t.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"3456");
    assert_eq!(t.position(), 7);
}

#[test]
fn reader_ignore() {
    let mut t = ReaderTokenizer::new(Trickle { data: DATA, step: 3 });
    let mut buf = [0u8; 4];
    t.peek_exact(&mut buf).unwrap();

    t.ignore(6).unwrap();
    assert_eq!(t.position(), 6);

    let mut buf = [0u8; 4];
    t.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"6789");
    assert_eq!(t.position(), 10);
}

#[test]
fn reader_truncated() {
    let mut t = ReaderTokenizer::new(Trickle { data: DATA, step: 4 });
    t.ignore(8).unwrap();

    let mut buf = [0u8; 4];
    assert!(matches!(
        t.peek_exact(&mut buf),
        Err(Error::TruncatedStream {
            needed: 4,
            position: 8
        })
    ));
    // A failed peek keeps what it got.
    let mut buf = [0u8; 2];
    t.peek_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"89");

    assert!(matches!(
        t.ignore(5),
        Err(Error::TruncatedStream { needed: 5, .. })
    ));
}

#[test]
fn reader_io_error() {
    struct Broken;
    impl std::io::Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            return Err(std::io::Error::from(std::io::ErrorKind::PermissionDenied));
        }
    }

    let mut t = ReaderTokenizer::new(Broken);
    let mut buf = [0u8; 1];
    assert_eq!(
        t.read_exact(&mut buf),
        Err(Error::Io(std::io::ErrorKind::PermissionDenied))
    );
}

/// Fails once with `TimedOut` after handing out `fail_after` bytes, then carries on.
struct Flaky<'a> {
    data: &'a [u8],
    fail_after: usize,
    failed: bool,
}

impl<'a> std::io::Read for Flaky<'a> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if !self.failed && self.fail_after == 0 {
            self.failed = true;
            return Err(std::io::Error::from(std::io::ErrorKind::TimedOut));
        }
        let mut n = core::cmp::min(buf.len(), self.data.len());
        if !self.failed {
            n = core::cmp::min(n, self.fail_after);
            self.fail_after -= n;
        }
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        return Ok(n);
    }
}

#[test]
fn reader_peek_interrupted_by_error() {
    let mut t = ReaderTokenizer::new(Flaky {
        data: b"LAME3.100",
        fail_after: 2,
        failed: false,
    });

    let mut buf = [0u8; 4];
    assert_eq!(
        t.peek_exact(&mut buf),
        Err(Error::Io(std::io::ErrorKind::TimedOut))
    );
    assert_eq!(t.position(), 0);

    // The two bytes read before the failure are still there, no padding.
    t.read_exact(&mut buf).unwrap();
    assert_eq!(&buf, b"LAME");
    assert_eq!(t.position(), 4);

    let mut rest = [0u8; 5];
    t.read_exact(&mut rest).unwrap();
    assert_eq!(&rest, b"3.100");
}

#[test]
fn reader_read_interrupted_by_error() {
    let mut t = ReaderTokenizer::new(Flaky {
        data: b"0123456789",
        fail_after: 3,
        failed: false,
    });

    let mut buf = [0u8; 6];
    assert_eq!(
        t.read_exact(&mut buf),
        Err(Error::Io(std::io::ErrorKind::TimedOut))
    );
    // The bytes that did arrive were consumed.
    assert_eq!(t.position(), 3);
}

#[test]
fn through_mut_ref() {
    fn skip_two<T: Tokenizer>(mut t: T) -> u64 {
        t.ignore(2).unwrap();
        return t.position();
    }

    let mut t = SliceTokenizer::new(DATA);
    assert_eq!(skip_two(&mut t), 2);
    assert_eq!(t.position(), 2);
}
