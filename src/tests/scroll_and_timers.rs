use super::*;

const MODAL_HTML: &str = r#"
<div id="TB_window">
  <div id="pane">
    <form id="f" class="ajax-form" action="/save">
      <input type="submit" id="edit-submit" name="op" value="Save">
    </form>
  </div>
</div>
"#;

#[test]
fn scroll_walk_stops_at_the_modal_after_scrolling_it() -> Result<()> {
    let mut page = Page::from_html(MODAL_HTML)?;
    page.set_scroll_top("#pane", 250)?;
    page.set_scroll_top("#TB_window", 120)?;
    page.set_viewport_scroll_y(500);

    let handle = page.start_scroll("#edit-submit")?;
    assert_eq!(page.pending_timers().len(), 1);

    page.advance_time(100)?;
    assert_eq!(page.scroll_top("#pane")?, 150);
    assert_eq!(page.scroll_top("#TB_window")?, 20);
    assert_eq!(page.viewport_scroll_y(), 500);

    page.advance_time(200)?;
    assert_eq!(page.scroll_top("#pane")?, 0);
    assert_eq!(page.scroll_top("#TB_window")?, 0);
    assert!(page.is_scrolling(handle));

    page.advance_time(100)?;
    assert!(!page.is_scrolling(handle));
    assert!(page.pending_timers().is_empty());
    assert_eq!(page.viewport_scroll_y(), 500);
    Ok(())
}

#[test]
fn without_a_modal_the_viewport_scrolls_too() -> Result<()> {
    let mut page = Page::from_html(
        r#"<div id="pane"><form class="ajax-form"><input type="submit" id="edit-submit"></form></div>"#,
    )?;
    page.set_viewport_scroll_y(150);
    page.set_scroll_top("#pane", 30)?;

    let handle = page.start_scroll("#edit-submit")?;
    page.advance_time(100)?;
    assert_eq!(page.scroll_top("#pane")?, 0);
    assert_eq!(page.viewport_scroll_y(), 50);

    page.flush()?;
    assert_eq!(page.viewport_scroll_y(), 0);
    assert!(!page.is_scrolling(handle));
    assert_eq!(page.now_ms(), 300);
    Ok(())
}

#[test]
fn cancel_stops_the_animation_once() -> Result<()> {
    let mut page = Page::from_html(MODAL_HTML)?;
    page.set_scroll_top("#pane", 400)?;
    let handle = page.start_scroll("#edit-submit")?;

    page.advance_time(100)?;
    assert!(page.cancel_scroll(handle));
    assert!(!page.cancel_scroll(handle));

    page.advance_time(1_000)?;
    assert_eq!(page.scroll_top("#pane")?, 300);
    assert!(page.pending_timers().is_empty());
    Ok(())
}

#[test]
fn newer_scroll_for_the_same_form_replaces_the_older_one() -> Result<()> {
    let mut page = Page::from_html(MODAL_HTML)?;
    page.set_scroll_top("#pane", 400)?;
    let first = page.start_scroll("#edit-submit")?;
    let second = page.start_scroll("#f")?;

    assert!(!page.is_scrolling(first));
    assert!(page.is_scrolling(second));
    assert_eq!(page.pending_timers().len(), 1);

    page.advance_time(100)?;
    assert_eq!(page.scroll_top("#pane")?, 300);
    Ok(())
}

#[test]
fn runaway_animation_hits_the_timer_step_limit() -> Result<()> {
    let config = AjaxConfig {
        scroll_step: 1,
        timer_step_limit: 5,
        ..AjaxConfig::default()
    };
    let mut page = Page::with_config(MODAL_HTML, config)?;
    page.set_scroll_top("#pane", 1_000)?;
    page.start_scroll("#edit-submit")?;

    match page.flush() {
        Err(Error::Runtime(message)) => {
            assert!(
                message.contains("timer queue exceeded max task steps"),
                "unexpected message: {message}"
            );
        }
        other => panic!("expected step limit error, got {other:?}"),
    }
    Ok(())
}

#[test]
fn clock_controls_reject_going_backwards() -> Result<()> {
    let mut page = Page::from_html(MODAL_HTML)?;
    page.advance_time(50)?;
    assert!(matches!(page.advance_time(-1), Err(Error::Runtime(_))));
    assert!(matches!(page.advance_time_to(10), Err(Error::Runtime(_))));
    page.advance_time_to(80)?;
    assert_eq!(page.now_ms(), 80);
    assert_eq!(page.run_due_timers()?, 0);
    Ok(())
}

#[test]
fn offsets_never_go_negative() -> Result<()> {
    let mut page = Page::from_html(MODAL_HTML)?;
    page.set_scroll_top("#pane", -40)?;
    page.set_viewport_scroll_y(-5);
    assert_eq!(page.scroll_top("#pane")?, 0);
    assert_eq!(page.viewport_scroll_y(), 0);
    Ok(())
}

#[test]
fn scroll_lines_are_traced_when_timer_tracing_is_on() -> Result<()> {
    let mut page = Page::from_html(MODAL_HTML)?;
    page.set_trace_timers(true);
    page.set_scroll_top("#pane", 50)?;
    page.take_trace_logs();

    page.start_scroll("#edit-submit")?;
    page.flush()?;

    let logs = page.take_trace_logs();
    assert!(logs.iter().any(|line| line.starts_with("[scroll] start handle=")));
    assert!(logs.iter().any(|line| line.starts_with("[scroll] step handle=")));
    assert!(logs.iter().any(|line| line.starts_with("[scroll] done handle=")));
    Ok(())
}
