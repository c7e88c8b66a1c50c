//! Python bindings for the Congklak engine.
//!
//! Lets a host application written in Python drive a local session.
//!
//! # Quick Start
//!
//! ```python
//! import congklak_engine as ck
//!
//! game = ck.Congklak()
//! game.apply_move(10)          # B4, lands in H2: extra turn
//! while (frame := game.next_frame()) is not None:
//!     draw(frame.board)        # wait game.step_delay_ms between frames
//!
//! game.legal_moves()           # [7, 8, 9, 11]
//!
//! saved = game.to_bytes()
//! game = ck.Congklak.from_bytes(saved)
//! ```

use pyo3::prelude::*;

mod py_session;

pub use py_session::*;

/// congklak_engine: a Congklak game engine with sow playback.
#[pymodule]
fn congklak_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCongklak>()?;
    m.add_class::<PyFrame>()?;
    Ok(())
}
