use num_complex::Complex;
use std::fmt::Display;
use std::io::{self, Write};

/// Receives (time, state) samples from an integration driver.
///
/// The state slice is only borrowed for the duration of the call; the driver
/// mutates it again on the next step. Observers that keep history must copy.
pub trait Observer<R, E> {
    fn observe(&mut self, t: R, state: &[E]);
}

impl<R, E, F> Observer<R, E> for F
where
    F: FnMut(R, &[E]),
{
    fn observe(&mut self, t: R, state: &[E]) {
        self(t, state)
    }
}

/// Records every sample it is handed.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<R, E> {
    times: Vec<R>,
    states: Vec<Vec<E>>,
}

impl<R, E> Trajectory<R, E> {
    pub fn new() -> Self {
        Self {
            times: Vec::new(),
            states: Vec::new(),
        }
    }

    pub fn with_capacity(samples: usize) -> Self {
        Self {
            times: Vec::with_capacity(samples),
            states: Vec::with_capacity(samples),
        }
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[R] {
        &self.times
    }

    pub fn states(&self) -> &[Vec<E>] {
        &self.states
    }

    pub fn last(&self) -> Option<(&R, &[E])> {
        self.times
            .last()
            .zip(self.states.last())
            .map(|(t, x)| (t, x.as_slice()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&R, &[E])> {
        self.times
            .iter()
            .zip(self.states.iter().map(Vec::as_slice))
    }
}

impl<R, E> Default for Trajectory<R, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Copy, E: Clone> Observer<R, E> for Trajectory<R, E> {
    fn observe(&mut self, t: R, state: &[E]) {
        self.times.push(t);
        self.states.push(state.to_vec());
    }
}

/// How a state element is laid out as text columns.
pub trait Columns {
    fn write_columns<W: Write>(&self, out: &mut W) -> io::Result<()>;
}

impl Columns for f64 {
    fn write_columns<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\t{self}")
    }
}

impl Columns for f32 {
    fn write_columns<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\t{self}")
    }
}

/// Complex values take two columns: real part, then imaginary part.
impl<T: Display> Columns for Complex<T> {
    fn write_columns<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\t{}\t{}", self.re, self.im)
    }
}

/// Writes one line per sample: time, then the state's columns, tab-separated.
///
/// `observe` cannot fail, so the first write error is latched and every later
/// sample is dropped. Call `finish` to flush and surface it.
#[derive(Debug)]
pub struct StreamingObserver<W: Write> {
    out: W,
    error: Option<io::Error>,
}

impl<W: Write> StreamingObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out, error: None }
    }

    fn write_sample<R: Display, E: Columns>(&mut self, t: R, state: &[E]) -> io::Result<()> {
        write!(self.out, "{t}")?;
        for x in state {
            x.write_columns(&mut self.out)?;
        }
        writeln!(self.out)
    }

    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<R: Display, E: Columns, W: Write> Observer<R, E> for StreamingObserver<W> {
    fn observe(&mut self, t: R, state: &[E]) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.write_sample(t, state) {
            tracing::warn!(error = %err, "observer sink failed; dropping further samples");
            self.error = Some(err);
        }
    }
}
