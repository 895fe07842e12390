//! Screen definitions for the recore TUI.

pub mod home;
pub mod login;

use crate::app::App;
use crate::theme::Palette;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use recore_core::Theme;

/// Trait for screens that can be rendered.
pub trait Screen {
    /// Render the screen to the buffer.
    fn render(&self, app: &App, area: Rect, buf: &mut Buffer);
}

/// Render the help overlay.
pub fn render_help_overlay(theme: Theme, area: Rect, buf: &mut Buffer) {
    use crate::ui::centered_fixed;
    use ratatui::widgets::{Block, Borders, Clear, Paragraph};

    let palette = Palette::for_theme(theme);

    let help_text = r"
  Teclas
    t                 Cambiar tema (claro/oscuro)
    m                 Abrir/cerrar menú
    /                 Buscar (página de inicio)
    1 / 2             Inicio / Iniciar sesión
    Tab / Shift+Tab   Siguiente/anterior campo
    j/k o flechas     Moverse por el menú
    Enter             Seleccionar/confirmar
    Esc               Volver/cancelar
    q                 Salir
    ?                 Mostrar esta ayuda

  [Pulsa cualquier tecla para cerrar]
";

    let width = 56.min(area.width.saturating_sub(4));
    let height = 17.min(area.height.saturating_sub(2));
    let overlay_area = centered_fixed(width, height, area);

    Clear.render(overlay_area, buf);

    let block = Block::default()
        .title(" Ayuda ")
        .title_style(palette.title())
        .borders(Borders::ALL)
        .border_style(palette.border_focused_style())
        .style(palette.default_style());

    Paragraph::new(help_text)
        .block(block)
        .style(palette.default_style())
        .render(overlay_area, buf);
}
