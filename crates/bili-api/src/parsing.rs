//! Normalization of backend payloads into domain types.
//!
//! Pure functions, one per (backend shape, domain type) pair. Where web and
//! app describe the same thing, both mappings produce equal records: web
//! `pic`/`length`/`created`/`video_review` line up with app
//! `cover`/`duration`/`ctime`/`danmaku`.

use bili_core::{
    DynamicVideo, DynamicVideoData, FollowedUser, RelationStat, RelationType, SpaceVideo,
};

use crate::models::{
    AppSpaceVideoItem, FollowingItem, RelationStatData, WebDynamicData, WebDynamicItem,
    WebSpaceVideoItem,
};
use crate::rpc::proto::{module, module_dynamic, DynVideoReply, DynamicItem, DynamicType};

// ============================================================================
// Scalar Helpers
// ============================================================================

/// Parse a duration like `"12:34"` or `"1:02:03"` into seconds.
///
/// Returns 0 for anything that is not colon-separated numbers.
pub fn parse_duration_text(text: &str) -> u64 {
    let text = text.trim();
    if text.is_empty() {
        return 0;
    }
    text.split(':')
        .try_fold(0_u64, |acc, part| {
            part.trim().parse::<u64>().ok().map(|n| acc * 60 + n)
        })
        .unwrap_or(0)
}

/// Parse a display count like `"1234"`, `"1.2万"`, `"3亿"` or `"5.6万观看"`.
///
/// Trailing text after the unit is ignored. Returns 0 when no leading number
/// is present (e.g. `"--"`).
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn parse_count(text: &str) -> u64 {
    let text = text.trim();
    let number_end = text
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
        .map_or(text.len(), |(i, _)| i);
    let (number, rest) = text.split_at(number_end);

    let Ok(value) = number.parse::<f64>() else {
        return 0;
    };
    let multiplier = match rest.chars().next() {
        Some('万') => 10_000.0,
        Some('亿') => 100_000_000.0,
        _ => 1.0,
    };
    (value * multiplier).round() as u64
}

// ============================================================================
// Relation
// ============================================================================

pub const fn to_relation_stat(data: &RelationStatData) -> RelationStat {
    RelationStat {
        mid: data.mid,
        following: data.following,
        whisper: data.whisper,
        black: data.black,
        follower: data.follower,
    }
}

/// Map a followings entry. Web and app share this payload.
pub fn to_followed_user(item: FollowingItem) -> FollowedUser {
    let official_desc = item
        .official_verify
        .filter(|verify| verify.kind >= 0)
        .map(|verify| verify.desc)
        .unwrap_or_default();

    FollowedUser {
        mid: item.mid,
        name: item.uname,
        avatar: item.face,
        sign: item.sign,
        followed_at: item.mtime,
        attribute: RelationType::from_code(item.attribute),
        official_desc,
    }
}

// ============================================================================
// Space Videos
// ============================================================================

pub fn web_space_video(item: WebSpaceVideoItem) -> SpaceVideo {
    SpaceVideo {
        aid: item.aid,
        bvid: item.bvid,
        title: item.title,
        cover: item.pic,
        author: item.author,
        duration_secs: parse_duration_text(&item.length),
        play: item.play,
        danmaku: item.video_review,
        published_at: item.created,
    }
}

pub fn app_space_video(item: AppSpaceVideoItem) -> SpaceVideo {
    SpaceVideo {
        aid: item.param.trim().parse().unwrap_or_default(),
        bvid: item.bvid,
        title: item.title,
        cover: item.cover,
        author: item.author,
        duration_secs: item.duration,
        play: item.play,
        danmaku: item.danmaku,
        published_at: item.ctime,
    }
}

// ============================================================================
// Dynamic Feed
// ============================================================================

fn web_dynamic_video(item: WebDynamicItem) -> Option<DynamicVideo> {
    if !item.kind.is_empty() && item.kind != "DYNAMIC_TYPE_AV" {
        return None;
    }
    let author = item.modules.module_author;
    let archive = item.modules.module_dynamic.major?.archive?;

    Some(DynamicVideo {
        aid: archive.aid,
        cid: 0,
        bvid: archive.bvid,
        title: archive.title,
        cover: archive.cover,
        author: author.name,
        author_mid: author.mid,
        author_face: author.face,
        duration_secs: parse_duration_text(&archive.duration_text),
        play: archive.stat.play,
        danmaku: archive.stat.danmaku,
        published_at: author.pub_ts,
    })
}

/// Map one page of the web feed. Non-video posts are skipped.
pub fn web_dynamic_data(data: WebDynamicData) -> DynamicVideoData {
    DynamicVideoData {
        videos: data.items.into_iter().filter_map(web_dynamic_video).collect(),
        has_more: data.has_more,
        offset: data.offset,
        update_baseline: data.update_baseline,
        update_num: data.update_num,
    }
}

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn app_dynamic_video(item: DynamicItem) -> Option<DynamicVideo> {
    if item.card_type() == DynamicType::Forward {
        return None;
    }

    let mut video = DynamicVideo::default();
    let mut has_archive = false;

    for module in item.modules {
        match module.module_item {
            Some(module::ModuleItem::ModuleAuthor(author)) => {
                video.author_mid = non_negative(author.mid);
                if let Some(info) = author.author {
                    video.author = info.name;
                    video.author_face = info.face;
                }
            }
            Some(module::ModuleItem::ModuleDynamic(dynamic)) => {
                if let Some(module_dynamic::ModuleItem::DynArchive(archive)) = dynamic.module_item
                {
                    has_archive = true;
                    video.aid = non_negative(archive.avid);
                    video.cid = non_negative(archive.cid);
                    video.bvid = archive.bvid;
                    video.title = archive.title;
                    video.cover = archive.cover;
                    video.duration_secs = match non_negative(archive.duration) {
                        0 => parse_duration_text(&archive.cover_left_text_1),
                        secs => secs,
                    };
                    video.play = parse_count(&archive.cover_left_text_2);
                    video.danmaku = parse_count(&archive.cover_left_text_3);
                }
            }
            None => {}
        }
    }

    has_archive.then_some(video)
}

/// Map a `DynVideo` reply. A reply without a list is an empty last page.
pub fn app_dynamic_data(reply: DynVideoReply) -> DynamicVideoData {
    let Some(list) = reply.dynamic_list else {
        return DynamicVideoData::default();
    };

    DynamicVideoData {
        videos: list.list.into_iter().filter_map(app_dynamic_video).collect(),
        has_more: list.has_more,
        offset: list.history_offset,
        update_baseline: list.update_baseline,
        update_num: non_negative(list.update_num),
    }
}
