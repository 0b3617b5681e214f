use crate::constants::{
    AMBIENT_DETUNE_CENTS, AMBIENT_FADE_TAU_SEC, AMBIENT_LOWPASS_HZ, AMBIENT_MASTER_LEVEL,
    AMBIENT_PARTIALS, AMBIENT_ROOT_HZ,
};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Soft detuned oscillator pad played while the playback toggle is on.
///
/// Oscillators run continuously once built; play/pause only moves the
/// master gain.
pub struct AmbientPad {
    ctx: web::AudioContext,
    master: web::GainNode,
    _voices: Vec<web::OscillatorNode>,
}

fn create_gain(
    audio_ctx: &web::AudioContext,
    value: f32,
    label: &str,
) -> anyhow::Result<web::GainNode> {
    let g = web::GainNode::new(audio_ctx)
        .map_err(|e| anyhow::anyhow!("{} GainNode error: {:?}", label, e))?;
    g.gain().set_value(value);
    Ok(g)
}

impl AmbientPad {
    pub fn new() -> anyhow::Result<Self> {
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let master = create_gain(&ctx, 0.0, "Master")?;
        _ = master.connect_with_audio_node(&ctx.destination());

        let tone = web::BiquadFilterNode::new(&ctx)
            .map_err(|e| anyhow::anyhow!("BiquadFilterNode error: {:?}", e))?;
        tone.set_type(web::BiquadFilterType::Lowpass);
        tone.frequency().set_value(AMBIENT_LOWPASS_HZ);
        _ = tone.connect_with_audio_node(&master);

        let level = 1.0 / AMBIENT_PARTIALS.len() as f32;
        let mut voices = Vec::with_capacity(AMBIENT_PARTIALS.len());
        for (ratio, cents) in AMBIENT_PARTIALS.iter().zip(AMBIENT_DETUNE_CENTS) {
            let osc = web::OscillatorNode::new(&ctx)
                .map_err(|e| anyhow::anyhow!("OscillatorNode error: {:?}", e))?;
            osc.set_type(web::OscillatorType::Triangle);
            osc.frequency().set_value(AMBIENT_ROOT_HZ * ratio);
            osc.detune().set_value(cents);
            let voice_gain = create_gain(&ctx, level, "Voice gain")?;
            _ = osc.connect_with_audio_node(&voice_gain);
            _ = voice_gain.connect_with_audio_node(&tone);
            _ = osc.start_with_when(ctx.current_time());
            voices.push(osc);
        }

        log::info!("[audio] ambient pad built with {} voices", voices.len());
        Ok(Self {
            ctx,
            master,
            _voices: voices,
        })
    }

    pub fn play(&self) {
        _ = self.ctx.resume();
        self.fade_to(AMBIENT_MASTER_LEVEL);
    }

    pub fn pause(&self) {
        self.fade_to(0.0);
    }

    fn fade_to(&self, level: f32) {
        let now = self.ctx.current_time();
        _ = self
            .master
            .gain()
            .set_target_at_time(level, now, AMBIENT_FADE_TAU_SEC);
    }
}

impl Drop for AmbientPad {
    fn drop(&mut self) {
        _ = self.ctx.close();
        log::info!("[audio] ambient pad closed");
    }
}

/// Apply the playback flag, building the pad on first play. Must run inside
/// a user gesture so the browser lets the context start.
pub fn set_playing(slot: &Rc<RefCell<Option<AmbientPad>>>, playing: bool) {
    let mut slot = slot.borrow_mut();
    if playing && slot.is_none() {
        match AmbientPad::new() {
            Ok(pad) => *slot = Some(pad),
            Err(e) => {
                log::warn!("[audio] ambient pad unavailable: {:?}", e);
                return;
            }
        }
    }
    if let Some(pad) = slot.as_ref() {
        if playing {
            pad.play();
        } else {
            pad.pause();
        }
    }
}
