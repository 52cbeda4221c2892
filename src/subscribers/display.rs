//! # Price displays and their render targets.
//!
//! [`PriceDisplay`] is the concrete subscriber of the board. It is bound at
//! construction to a fixed set of [`Surface`]s and writes every broadcast value
//! to **all** of them, not just one.
//!
//! ## Surfaces
//! - [`TextSurface`] keeps the last text in memory (embedders, tests).
//! - [`ConsoleSurface`] prints `[tag] text` to stdout (demo binary).

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

use super::Subscribe;

/// A display target that accepts text.
pub trait Surface: Send + Sync + 'static {
    /// Replaces the displayed text.
    fn set_text(&self, text: &str);
}

/// In-memory surface holding the last text it was given.
#[derive(Debug, Default)]
pub struct TextSurface {
    text: Mutex<String>,
    writes: Mutex<usize>,
}

impl TextSurface {
    /// Creates an empty surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty shared surface.
    #[must_use]
    pub fn arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Current text.
    pub fn text(&self) -> String {
        self.text.lock().clone()
    }

    /// Number of `set_text` calls so far.
    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl Surface for TextSurface {
    fn set_text(&self, text: &str) {
        let mut current = self.text.lock();
        current.clear();
        current.push_str(text);
        *self.writes.lock() += 1;
    }
}

/// Console surface printing `[tag] text` per update.
///
/// Writes to stdout unless another sink is injected. A failed write (closed
/// pipe, full disk) is logged at `debug` and the update is dropped.
pub struct ConsoleSurface {
    tag: String,
    sink: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSurface {
    /// Creates a stdout surface printing with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_writer(tag, io::stdout())
    }

    /// Creates a surface printing to `writer` with the given tag.
    pub fn with_writer<W: Write + Send + 'static>(tag: impl Into<String>, writer: W) -> Self {
        Self {
            tag: tag.into(),
            sink: Mutex::new(Box::new(writer)),
        }
    }

    /// Creates a shared stdout surface printing with the given tag.
    pub fn arc(tag: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(tag))
    }

    /// Tag printed before each value.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl fmt::Debug for ConsoleSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConsoleSurface")
            .field("tag", &self.tag)
            .finish_non_exhaustive()
    }
}

impl Surface for ConsoleSurface {
    fn set_text(&self, text: &str) {
        let mut sink = self.sink.lock();
        let written = writeln!(sink, "[{}] {text}", self.tag);
        if let Err(err) = written.and_then(|()| sink.flush()) {
            log::debug!("console surface {} dropped update: {err}", self.tag);
        }
    }
}

/// Subscriber rendering each value onto every bound surface.
pub struct PriceDisplay {
    name: &'static str,
    surfaces: Vec<Arc<dyn Surface>>,
}

impl PriceDisplay {
    /// Binds a display to its surfaces.
    ///
    /// The set of surfaces is fixed for the lifetime of the display.
    pub fn new(name: &'static str, surfaces: Vec<Arc<dyn Surface>>) -> Self {
        Self { name, surfaces }
    }

    /// Number of bound surfaces.
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }
}

impl fmt::Debug for PriceDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriceDisplay")
            .field("name", &self.name)
            .field("surfaces", &self.surfaces.len())
            .finish()
    }
}

impl<V: fmt::Display + ?Sized> Subscribe<V> for PriceDisplay {
    fn render(&self, value: &V) {
        let text = value.to_string();
        for surface in &self.surfaces {
            surface.set_text(&text);
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_updates_every_surface() {
        let a = TextSurface::arc();
        let b = TextSurface::arc();
        let surfaces: Vec<Arc<dyn Surface>> = vec![a.clone(), b.clone()];
        let display = PriceDisplay::new("price", surfaces);

        Subscribe::<str>::render(&display, "100");
        assert_eq!(a.text(), "100");
        assert_eq!(b.text(), "100");

        Subscribe::<str>::render(&display, "200");
        assert_eq!(a.text(), "200");
        assert_eq!(b.text(), "200");
        assert_eq!(a.writes(), 2);
    }

    #[test]
    fn test_render_any_display_value() {
        let surface = TextSurface::arc();
        let surfaces: Vec<Arc<dyn Surface>> = vec![surface.clone()];
        let display = PriceDisplay::new("price", surfaces);

        Subscribe::<u64>::render(&display, &42_000);
        assert_eq!(surface.text(), "42000");
    }

    #[test]
    fn test_no_surfaces_is_fine() {
        let display = PriceDisplay::new("empty", Vec::new());
        Subscribe::<str>::render(&display, "ignored");
        assert_eq!(display.surface_count(), 0);
        assert_eq!(Subscribe::<str>::name(&display), "empty");
    }

    #[test]
    fn test_console_surface_tag() {
        let surface = ConsoleSurface::new("em");
        assert_eq!(surface.tag(), "em");
    }

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    #[test]
    fn test_console_surface_writes_tagged_lines() {
        let buf = SharedBuf::default();
        let surfaces: Vec<Arc<dyn Surface>> =
            vec![Arc::new(ConsoleSurface::with_writer("em", buf.clone()))];
        let display = PriceDisplay::new("price", surfaces);

        Subscribe::<str>::render(&display, "100");
        Subscribe::<str>::render(&display, "200");

        let out = String::from_utf8(buf.0.lock().clone()).unwrap();
        assert_eq!(out, "[em] 100\n[em] 200\n");
    }

    #[test]
    fn test_closed_sink_does_not_panic_render() {
        let text = TextSurface::arc();
        let surfaces: Vec<Arc<dyn Surface>> = vec![
            Arc::new(ConsoleSurface::with_writer("em", ClosedPipe)),
            text.clone(),
        ];
        let display = PriceDisplay::new("price", surfaces);

        for value in ["1", "2", "3"] {
            Subscribe::<str>::render(&display, value);
        }
        assert_eq!(text.text(), "3");
        assert_eq!(text.writes(), 3);
    }

    #[test]
    fn test_closed_sink_without_panic_isolation() {
        let cfg = crate::Config {
            isolate_panics: false,
            ..crate::Config::default()
        };
        let publisher = crate::Publisher::<str>::with_config(&cfg);
        let surfaces: Vec<Arc<dyn Surface>> =
            vec![Arc::new(ConsoleSurface::with_writer("label", ClosedPipe))];
        publisher.subscribe(&crate::Handle::new(PriceDisplay::new("label", surfaces)));

        assert_eq!(publisher.broadcast("42000"), 1);
        assert_eq!(publisher.broadcast("43000"), 1);
    }
}
