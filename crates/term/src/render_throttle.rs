//! Frame skipping for a mostly-static screen.
//!
//! A memory board only changes on input, on the per-second clock and when a
//! flip-back fires, so most loop iterations can skip drawing entirely.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    /// Repaint at least this often even when nothing changed.
    refresh_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(refresh_ms: u64) -> Self {
        Self {
            refresh_ms,
            last: None,
        }
    }

    /// True on the first frame, whenever the fingerprint changes, and once
    /// per `refresh_ms` otherwise.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        let render = match self.last {
            None => true,
            Some((at, fp)) => fp != fingerprint || now_ms.saturating_sub(at) >= self.refresh_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call renders.
    pub fn force(&mut self) {
        self.last = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_unchanged_frames_until_refresh() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(50, 7));
        assert!(!t.should_render(999, 7));
        assert!(t.should_render(1000, 7));
    }

    #[test]
    fn fingerprint_change_renders_immediately() {
        let mut t = RenderThrottle::new(1000);
        assert!(t.should_render(0, 1));
        assert!(t.should_render(10, 2));
        assert!(!t.should_render(20, 2));

        t.force();
        assert!(t.should_render(30, 2));
    }
}
