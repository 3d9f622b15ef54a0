//! Feedback sounds synthesized with the Web Audio API inside the webview.
//!
//! No sound files ship with the app; each cue is a short sequence of
//! oscillator notes with an exponential decay.

use dioxus::document::eval;
use quiz_core::model::FeedbackCue;

use crate::context::SoundSetting;

/// One oscillator note: frequency in Hz, start offset and length in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Note {
    freq: f32,
    at: f32,
    len: f32,
}

const fn note(freq: f32, at: f32, len: f32) -> Note {
    Note { freq, at, len }
}

// rising C major arpeggio
const START_NOTES: &[Note] = &[
    note(523.25, 0.0, 0.15),
    note(659.25, 0.12, 0.15),
    note(783.99, 0.24, 0.15),
    note(1046.5, 0.36, 0.3),
];
const HINT_NOTES: &[Note] = &[note(880.0, 0.0, 0.12), note(1174.66, 0.1, 0.2)];
const CORRECT_NOTES: &[Note] = &[
    note(659.25, 0.0, 0.12),
    note(830.61, 0.1, 0.12),
    note(987.77, 0.2, 0.35),
];
// low falling buzz
const WRONG_NOTES: &[Note] = &[note(220.0, 0.0, 0.18), note(164.81, 0.16, 0.3)];

fn notes_for(cue: FeedbackCue) -> (&'static str, f32, &'static [Note]) {
    match cue {
        FeedbackCue::Start => ("triangle", 0.25, START_NOTES),
        FeedbackCue::Hint => ("sine", 0.2, HINT_NOTES),
        FeedbackCue::Correct => ("triangle", 0.3, CORRECT_NOTES),
        FeedbackCue::Wrong => ("sawtooth", 0.15, WRONG_NOTES),
    }
}

pub(crate) fn cue_script(cue: FeedbackCue) -> String {
    let (wave, volume, notes) = notes_for(cue);
    let notes_js = notes
        .iter()
        .map(|n| format!("[{}, {}, {}]", n.freq, n.at, n.len))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"(function() {{
                const Ctx = window.AudioContext || window.webkitAudioContext;
                if (!Ctx) return;
                const ctx = window.__mdquizAudio || (window.__mdquizAudio = new Ctx());
                if (ctx.state === "suspended") ctx.resume();
                const t = ctx.currentTime;
                for (const [freq, at, len] of [{notes_js}]) {{
                    const osc = ctx.createOscillator();
                    const gain = ctx.createGain();
                    osc.type = {wave:?};
                    osc.frequency.setValueAtTime(freq, t + at);
                    gain.gain.setValueAtTime({volume}, t + at);
                    gain.gain.exponentialRampToValueAtTime(0.01, t + at + len);
                    osc.connect(gain);
                    gain.connect(ctx.destination);
                    osc.start(t + at);
                    osc.stop(t + at + len + 0.05);
                }}
            }})();"#,
    )
}

/// Play `cue` unless the learner muted sound effects.
pub(crate) fn play_cue(sound: SoundSetting, cue: FeedbackCue) {
    if !sound.enabled() {
        return;
    }
    let _ = eval(&cue_script(cue));
}
