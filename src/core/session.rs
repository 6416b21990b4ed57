use super::audio::AudioCommand;

/// Explicit, duration-bounded meditation started from the overlay controls,
/// independent of spot proximity. Shares the ambient-track controller with
/// the activation machine; the controller's single-session rule arbitrates.
#[derive(Default)]
pub struct GuidedSession {
    remaining_ms: Option<f64>,
}

impl GuidedSession {
    /// Start (or restart) a session of `minutes` and fade the track in.
    pub fn begin(&mut self, minutes: u32, out: &mut Vec<AudioCommand>) {
        self.remaining_ms = Some(f64::from(minutes) * 60.0 * 1000.0);
        out.push(AudioCommand::StartFadeIn);
        log::info!("[session] started {minutes} min guided session");
    }

    /// Stop an in-progress session and fade the track out. No-op otherwise.
    pub fn end(&mut self, out: &mut Vec<AudioCommand>) {
        if self.remaining_ms.take().is_some() {
            out.push(AudioCommand::StopFadeOut);
            log::info!("[session] ended");
        }
    }

    /// Count down on simulation time; expiry behaves exactly like `end`.
    pub fn tick(&mut self, dt_ms: f64, out: &mut Vec<AudioCommand>) {
        let Some(remaining) = self.remaining_ms.as_mut() else {
            return;
        };
        *remaining -= dt_ms;
        if *remaining <= 0.0 {
            self.remaining_ms = None;
            out.push(AudioCommand::StopFadeOut);
            log::info!("[session] duration elapsed");
        }
    }

    pub fn is_running(&self) -> bool {
        self.remaining_ms.is_some()
    }

    pub fn remaining_ms(&self) -> Option<f64> {
        self.remaining_ms
    }
}
