use std::collections::HashSet;
use rand::seq::SliceRandom;
use rand::Rng;
use crate::questions::passage::PassageGroup;
use crate::questions::question::Question;

/// Final plan order from independently selected non-reading items and
/// passage groups.
///
/// Non-reading items are shuffled and de-clustered, groups are shuffled as
/// whole units, then each group is placed after an evenly spaced run of
/// non-reading items. Group members never move relative to each other.
pub fn arrange<R: Rng + ?Sized>(
    mut singles: Vec<Question>,
    mut groups: Vec<PassageGroup>,
    max_consecutive_same_tag: usize,
    rng: &mut R,
) -> Vec<Question> {
    singles.shuffle(rng);
    spread_tag_runs(&mut singles, max_consecutive_same_tag);
    groups.shuffle(rng);
    interleave(singles, groups)
}

/// Insert one group after every `interval` singles, where
/// `interval = max(1, singles / (groups + 1))`; leftover groups go last.
pub fn interleave(singles: Vec<Question>, groups: Vec<PassageGroup>) -> Vec<Question> {
    let total = singles.len() + groups.iter().map(PassageGroup::len).sum::<usize>();
    let interval = (singles.len() / (groups.len() + 1)).max(1);

    let mut ordered = Vec::with_capacity(total);
    let mut groups = groups.into_iter();

    for (i, question) in singles.into_iter().enumerate() {
        ordered.push(question);
        if (i + 1) % interval == 0 {
            if let Some(group) = groups.next() {
                ordered.extend(group.questions);
            }
        }
    }
    for group in groups {
        ordered.extend(group.questions);
    }

    ordered
}

/// Best-effort break-up of runs longer than `max_run` questions sharing a tag.
///
/// Single pass: whenever a window of `max_run + 1` items shares a common tag,
/// the window's last item is swapped with the first later item carrying none
/// of those tags. Adversarial tag distributions can still leave long runs.
pub fn spread_tag_runs(questions: &mut [Question], max_run: usize) {
    if max_run == 0 || questions.len() <= max_run {
        return;
    }

    for i in 0..questions.len() - max_run {
        let tail = i + max_run;
        let replacement = {
            let mut common: HashSet<&str> =
                questions[i].skill_tags.iter().map(String::as_str).collect();
            for q in &questions[i + 1..=tail] {
                let tags: HashSet<&str> = q.skill_tags.iter().map(String::as_str).collect();
                common.retain(|t| tags.contains(t));
            }
            if common.is_empty() {
                continue;
            }

            questions[tail + 1..]
                .iter()
                .position(|q| !q.skill_tags.iter().any(|t| common.contains(t.as_str())))
                .map(|offset| tail + 1 + offset)
        };

        if let Some(j) = replacement {
            tracing::debug!(position = tail, swap_with = j, "Broke up same-tag run");
            questions.swap(tail, j);
        }
    }
}
