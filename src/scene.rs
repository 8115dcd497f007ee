//! Display scene: a frame border and the cursor square.
//!
//! The scene is redrawn from scratch every loop iteration.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};

use crate::config::CursorConfig;
use crate::cursor::CursorPosition;

/// Inset of the inner rectangle of a double border
pub const DOUBLE_BORDER_INSET: u32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BorderStyle {
    #[default]
    Single,
    Double,
}

impl BorderStyle {
    pub const fn from_doubled(doubled: bool) -> Self {
        if doubled { Self::Double } else { Self::Single }
    }
}

/// Draws the panel scene onto any monochrome draw target
#[derive(Debug, Clone, Copy)]
pub struct SceneRenderer {
    square_size: u32,
}

impl SceneRenderer {
    pub fn new(config: &CursorConfig) -> Self {
        Self {
            square_size: u32::from(config.square_size.unsigned_abs()),
        }
    }

    /// Clear `target`, then draw the border and the square at `cursor`
    pub fn draw<D>(
        &self,
        target: &mut D,
        cursor: CursorPosition,
        border: BorderStyle,
    ) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = BinaryColor>,
    {
        target.clear(BinaryColor::Off)?;

        let stroke = PrimitiveStyle::with_stroke(BinaryColor::On, 1);
        let outline = target.bounding_box();
        outline.into_styled(stroke).draw(target)?;

        if border == BorderStyle::Double {
            let inset = DOUBLE_BORDER_INSET;
            let inner = Rectangle::new(
                outline.top_left + Size::new(inset, inset),
                outline.size.saturating_sub(Size::new(inset * 2, inset * 2)),
            );
            inner.into_styled(stroke).draw(target)?;
        }

        Rectangle::new(cursor.to_point(), Size::new(self.square_size, self.square_size))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(target)
    }
}
