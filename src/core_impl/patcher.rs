use super::*;

/// Applies `updates` in list order and returns how many element mutations
/// ran. Each selector is resolved against the document as left by the
/// previous instruction; a selector matching nothing is skipped.
pub fn apply_updates<D: DomAccess + ?Sized>(
    dom: &mut D,
    updates: &[UpdateInstruction],
) -> Result<usize> {
    let mut applied = 0usize;
    for update in updates {
        let targets = dom.find(&update.selector)?;
        for target in targets {
            let op = match &update.kind {
                UpdateKind::ReplaceInner(html) => DomOp::SetInnerHtml(html.clone()),
                UpdateKind::ReplaceOuter(html) => DomOp::ReplaceOuterHtml(html.clone()),
                UpdateKind::SetValue(value) => DomOp::SetValue(value.clone()),
                UpdateKind::Remove => DomOp::Remove,
            };
            dom.mutate(target, op)?;
            applied += 1;
        }
    }
    Ok(applied)
}
