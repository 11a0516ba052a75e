//! A surface that remembers what was drawn.

use glam::DVec2;

use super::command::{ArrowCommand, Command, DrawCommand, LineCommand, TextCommand};
use super::svg::{SvgOptions, render_svg};
use super::{ArrowStyle, Stroke, Surface, TextStyle};
use crate::errors::Result;
use crate::types::BBox;

/// Records every drawing call in order.
///
/// Serves both as the in-memory figure behind SVG output and as the
/// stand-in plotting backend in tests.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    commands: Vec<DrawCommand>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn lines(&self) -> impl Iterator<Item = &LineCommand> {
        self.commands.iter().filter_map(DrawCommand::as_line)
    }

    pub fn arrows(&self) -> impl Iterator<Item = &ArrowCommand> {
        self.commands.iter().filter_map(DrawCommand::as_arrow)
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(DrawCommand::as_text)
    }

    /// Bounding box over all recorded commands.
    pub fn bounds(&self) -> BBox {
        let mut bounds = BBox::new();
        for cmd in &self.commands {
            cmd.extend_bounds(&mut bounds);
        }
        bounds
    }

    /// Issue every recorded command, in order, on another surface.
    pub fn replay(&self, surface: &mut dyn Surface) -> Result<()> {
        for cmd in &self.commands {
            cmd.replay(surface)?;
        }
        Ok(())
    }

    pub fn to_svg(&self, options: &SvgOptions) -> Result<String> {
        render_svg(&self.commands, options)
    }
}

impl Surface for Recorder {
    fn draw_line(&mut self, points: &[DVec2], stroke: &Stroke) -> Result<()> {
        self.commands.push(
            LineCommand {
                points: points.to_vec(),
                stroke: stroke.clone(),
            }
            .into(),
        );
        Ok(())
    }

    fn draw_arrow(&mut self, from: DVec2, to: DVec2, style: &ArrowStyle) -> Result<()> {
        self.commands.push(
            ArrowCommand {
                from,
                to,
                style: style.clone(),
            }
            .into(),
        );
        Ok(())
    }

    fn draw_text(&mut self, at: DVec2, text: &str, style: &TextStyle) -> Result<()> {
        self.commands.push(
            TextCommand {
                at,
                text: text.to_string(),
                style: *style,
            }
            .into(),
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::dvec2;

    #[test]
    fn records_in_order() {
        let mut rec = Recorder::new();
        rec.draw_line(&[dvec2(0.0, 0.0), dvec2(1.0, 0.0)], &Stroke::default())
            .unwrap();
        rec.draw_arrow(dvec2(0.5, 0.0), dvec2(1.0, 0.0), &ArrowStyle::default())
            .unwrap();
        rec.draw_text(dvec2(0.5, 0.5), "I", &TextStyle::default()).unwrap();

        assert_eq!(rec.len(), 3);
        assert!(matches!(rec.commands()[0], DrawCommand::Line(_)));
        assert!(matches!(rec.commands()[1], DrawCommand::Arrow(_)));
        assert!(matches!(rec.commands()[2], DrawCommand::Text(_)));
        assert_eq!(rec.texts().next().unwrap().text, "I");
    }

    #[test]
    fn bounds_skip_empty_labels() {
        let mut rec = Recorder::new();
        rec.draw_line(&[dvec2(0.0, 0.0), dvec2(1.0, 2.0)], &Stroke::default())
            .unwrap();
        rec.draw_text(dvec2(5.0, 5.0), "", &TextStyle::default()).unwrap();

        let bb = rec.bounds();
        assert_eq!(bb.min, dvec2(0.0, 0.0));
        assert_eq!(bb.max, dvec2(1.0, 2.0));
    }

    #[test]
    fn replay_reproduces_commands() {
        let mut rec = Recorder::new();
        rec.draw_arrow(dvec2(0.0, 0.0), dvec2(0.0, 1.0), &ArrowStyle::default())
            .unwrap();
        rec.draw_text(dvec2(0.1, 0.5), "V", &TextStyle::default()).unwrap();

        let mut copy = Recorder::new();
        rec.replay(&mut copy).unwrap();
        assert_eq!(copy.commands(), rec.commands());

        rec.clear();
        assert!(rec.is_empty());
    }
}
