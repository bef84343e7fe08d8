use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::TopBar;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let chrome = app.chrome();
    frame.render_widget(TopBar::new(&chrome).widget(header), header);

    frame.render_widget(Clear, body);
    app.screen().render(frame, body);

    let footer_widget = Footer::new(app.current(), app.status(), app.show_hints());
    frame.render_widget(footer_widget.widget(footer), footer);
}
