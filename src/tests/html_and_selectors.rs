use super::*;

fn by_id(dom: &Dom, id: &str) -> Result<NodeId> {
    dom.by_id(id)
        .ok_or_else(|| Error::SelectorNotFound(format!("#{id}")))
}

#[test]
fn parse_builds_tree_with_id_index_and_decoded_text() -> Result<()> {
    let dom = Dom::parse(
        r#"
        <div id="wrap">
          <p class="lead intro">Fish &amp; chips</p><br>
          <p id="second">second</p>
        </div>
        "#,
    )?;

    let wrap = by_id(&dom, "wrap")?;
    assert_eq!(dom.query_selector_all("p")?.len(), 2);
    assert_eq!(dom.query_selector_all("#wrap > br")?.len(), 1);
    let lead = dom
        .query_selector(".lead.intro")?
        .ok_or_else(|| Error::SelectorNotFound(".lead.intro".into()))?;
    assert_eq!(dom.text_content(lead), "Fish & chips");
    assert_eq!(dom.query_selector_all_from(wrap, ".intro")?, vec![lead]);
    assert!(dom.is_connected(lead));
    Ok(())
}

#[test]
fn raw_text_and_optional_end_tags_are_handled() -> Result<()> {
    let dom = Dom::parse(
        r#"
        <form id="f">
          <textarea id="body" name="body">a <b>bold</b> claim</textarea>
          <select id="size" name="size">
            <option value="s">Small
            <option value="m" selected>Medium
            <option>Large
          </select>
          <ul><li>one<li>two</ul>
        </form>
        "#,
    )?;

    assert_eq!(dom.value(by_id(&dom, "body")?)?, "a <b>bold</b> claim");
    assert_eq!(dom.value(by_id(&dom, "size")?)?, "m");
    assert_eq!(dom.query_selector_all("#size option")?.len(), 3);
    assert_eq!(dom.query_selector_all("ul > li")?.len(), 2);
    Ok(())
}

#[test]
fn selector_engine_supports_combinators_attributes_and_pseudo_classes() -> Result<()> {
    let dom = Dom::parse(
        r#"
        <form id="f" class="ajax-form">
          <input id="a" name="title" type="text">
          <input id="b" name="op" type="submit" class="ajax-trigger">
          <input id="c" name="preview" type="submit" class="ajax-trigger" disabled>
          <input id="d" type="checkbox" checked>
        </form>
        "#,
    )?;

    let ids = |selector: &str| -> Result<Vec<String>> {
        Ok(dom
            .query_selector_all(selector)?
            .into_iter()
            .filter_map(|node| dom.attr(node, "id"))
            .collect())
    };

    assert_eq!(ids("form.ajax-form .ajax-trigger")?, vec!["b", "c"]);
    assert_eq!(ids("input[name=op]")?, vec!["b"]);
    assert_eq!(ids("input[name^=pre]")?, vec!["c"]);
    assert_eq!(ids(".ajax-trigger:not(:disabled)")?, vec!["b"]);
    assert_eq!(ids("input:checked")?, vec!["d"]);
    assert_eq!(ids("#a + input")?, vec!["b"]);
    assert_eq!(ids("#a ~ input:last-child")?, vec!["d"]);
    assert_eq!(ids("#d, #a")?, vec!["a", "d"]);
    assert!(dom.matches_selector(by_id(&dom, "b")?, "form > .ajax-trigger")?);
    Ok(())
}

#[test]
fn malformed_selectors_are_rejected() {
    for selector in ["", "p >", "> p", "div[", "a,,b", ":nth-child(2)"] {
        let result = Dom::parse("<p></p>").and_then(|dom| dom.query_selector_all(selector));
        assert!(
            matches!(result, Err(Error::UnsupportedSelector(_))),
            "selector {selector:?} should be unsupported, got {result:?}"
        );
    }
}

#[test]
fn scoped_queries_only_see_descendants() -> Result<()> {
    let dom = Dom::parse(
        r#"
        <div id="outer" class="box">
          <div id="inner" class="box"></div>
        </div>
        "#,
    )?;
    let outer = by_id(&dom, "outer")?;
    let scoped = dom.query_selector_all_from(outer, ".box")?;
    assert_eq!(scoped, vec![by_id(&dom, "inner")?]);
    Ok(())
}

#[test]
fn fragments_lose_scripts_and_inline_handlers() -> Result<()> {
    let mut dom = Dom::parse(r#"<div id="target">old</div>"#)?;
    let target = by_id(&dom, "target")?;
    dom.set_inner_html(
        target,
        r#"<script>alert(1)</script><a id="link" href="/next" onclick="steal()">next</a>"#,
    )?;

    assert_eq!(dom.query_selector_all("script")?.len(), 0);
    let link = by_id(&dom, "link")?;
    assert_eq!(dom.attr(link, "onclick"), None);
    assert_eq!(dom.attr(link, "href").as_deref(), Some("/next"));
    assert_eq!(dom.inner_html(target)?, r#"<a href="/next" id="link">next</a>"#);
    Ok(())
}

#[test]
fn outer_replacement_keeps_sibling_position_and_reindexes_ids() -> Result<()> {
    let mut dom = Dom::parse(r#"<ul id="list"><li id="a">a</li><li id="b">b</li><li id="c">c</li></ul>"#)?;
    let b = by_id(&dom, "b")?;
    let inserted = dom.set_outer_html(b, r#"<li id="b2">x</li><li id="b3">y</li>"#)?;

    assert_eq!(inserted.len(), 2);
    assert!(dom.by_id("b").is_none());
    assert!(!dom.is_connected(b));
    let list = by_id(&dom, "list")?;
    assert_eq!(dom.text_content(list), "axyc");
    Ok(())
}

#[test]
fn removing_the_document_root_is_an_error() -> Result<()> {
    let mut dom = Dom::parse("<p>x</p>")?;
    let root = dom.root();
    assert!(matches!(dom.remove_node(root), Err(Error::Runtime(_))));
    Ok(())
}
