//! Decoding step: key-lookup-with-default from a raw record into the
//! typed category data. Absent fields substitute neutral defaults and
//! never fail the pipeline; self-tracked data is sparse by nature.
//!
//! Property names match the store's schema verbatim.

use crate::assets::{
    Category, CognitiveData, ContentData, FocusData, HealthData, DEFAULT_BODY_FEELING,
    DEFAULT_EXERCISE_INTENSITY, DEFAULT_SLEEP_QUALITY, DEFAULT_STRESS_LEVEL,
};
use crate::ingest::types::RawMetricRecord;

// Health database properties.
const P_STEPS: &str = "步数";
const P_HEART_RATE: &str = "心率";
const P_EXERCISE_MINUTES: &str = "运动时长（M）";
const P_SLEEP_HOURS: &str = "睡眠时长";
const P_DEEP_SLEEP_HOURS: &str = "深度睡眠时长";
const P_REM_SLEEP_HOURS: &str = "REM睡眠时长";
const P_MEDITATION_MINUTES: &str = "冥想时长";
const P_MEDITATION_QUALITY: &str = "冥想质量";
const P_MINDFULNESS_COUNT: &str = "正念觉察次数";
const P_STRESS_LEVEL: &str = "压力等级";
const P_BODY_FEELING: &str = "身体感受";
const P_EXERCISE_INTENSITY: &str = "运动强度";
const P_SLEEP_QUALITY: &str = "睡眠质量评分";

// Cognitive database properties.
const P_NEW_CONCEPTS: &str = "新增概念数";
const P_NEW_NOTES: &str = "新增笔记数";
const P_CONCEPT_CONNECTIONS: &str = "概念连接数";
const P_KNOWLEDGE_APPLICATIONS: &str = "知识应用次数";
const P_READING_PAGES: &str = "阅读页数";
const P_STUDY_MINUTES: &str = "学习时长";
const P_CREATIVE_IDEAS: &str = "创意想法数";
const P_IDEA_EXECUTIONS: &str = "创意执行数";
const P_CROSS_DOMAIN_LINKS: &str = "跨领域链接";
const P_STUDY_QUALITY: &str = "学习质量评分";
const P_INNOVATION_RATING: &str = "创新度评分";

// Content database properties.
const P_PUBLISHED_POSTS: &str = "发布内容数";
const P_TOTAL_VIEWS: &str = "总浏览量";
const P_TOTAL_ENGAGEMENT: &str = "总互动数";
const P_NEW_FOLLOWERS: &str = "新增粉丝数";
const P_CONTENT_QUALITY: &str = "内容质量评分";
const P_CREATION_MINUTES: &str = "创作时长";
const P_IDEAS_CONVERTED: &str = "想法转化数";
const P_IDEAS_CAPTURED: &str = "捕获想法数";
const P_PROFESSIONAL_RATING: &str = "专业度评分";
const P_REVENUE: &str = "收入贡献";

// Focus database properties.
const P_FLOW_HOURS: &str = "心流时长";
const P_FLOW_SESSIONS: &str = "心流次数";
const P_FLOW_QUALITY: &str = "心流质量";
const P_SCREEN_HOURS: &str = "屏幕时间";
const P_PRODUCTIVE_HOURS: &str = "生产力应用时间";
const P_ENTERTAINMENT_HOURS: &str = "娱乐应用时间";
const P_NOTIFICATIONS: &str = "通知次数";
const P_PHONE_FREE_HOURS: &str = "无手机时长";
const P_POMODOROS: &str = "番茄钟完成数";
const P_TASK_SWITCHES: &str = "任务切换次数";

fn num(rec: &RawMetricRecord, key: &str) -> f64 {
    rec.number(key).unwrap_or(0.0)
}

fn label(rec: &RawMetricRecord, key: &str, default: &str) -> String {
    rec.label(key).unwrap_or(default).to_string()
}

pub fn decode_health(rec: &RawMetricRecord) -> HealthData {
    HealthData {
        steps: num(rec, P_STEPS),
        heart_rate: num(rec, P_HEART_RATE),
        exercise_minutes: num(rec, P_EXERCISE_MINUTES),
        sleep_hours: num(rec, P_SLEEP_HOURS),
        deep_sleep_hours: num(rec, P_DEEP_SLEEP_HOURS),
        rem_sleep_hours: num(rec, P_REM_SLEEP_HOURS),
        meditation_minutes: num(rec, P_MEDITATION_MINUTES),
        meditation_quality: num(rec, P_MEDITATION_QUALITY),
        mindfulness_count: num(rec, P_MINDFULNESS_COUNT),
        stress_level: label(rec, P_STRESS_LEVEL, DEFAULT_STRESS_LEVEL),
        body_feeling: label(rec, P_BODY_FEELING, DEFAULT_BODY_FEELING),
        exercise_intensity: label(rec, P_EXERCISE_INTENSITY, DEFAULT_EXERCISE_INTENSITY),
        sleep_quality: label(rec, P_SLEEP_QUALITY, DEFAULT_SLEEP_QUALITY),
    }
}

pub fn decode_cognitive(rec: &RawMetricRecord) -> CognitiveData {
    CognitiveData {
        new_concepts: num(rec, P_NEW_CONCEPTS),
        new_notes: num(rec, P_NEW_NOTES),
        concept_connections: num(rec, P_CONCEPT_CONNECTIONS),
        knowledge_applications: num(rec, P_KNOWLEDGE_APPLICATIONS),
        reading_pages: num(rec, P_READING_PAGES),
        study_minutes: num(rec, P_STUDY_MINUTES),
        creative_ideas: num(rec, P_CREATIVE_IDEAS),
        idea_executions: num(rec, P_IDEA_EXECUTIONS),
        cross_domain_links: num(rec, P_CROSS_DOMAIN_LINKS),
        study_quality: num(rec, P_STUDY_QUALITY),
        innovation_rating: num(rec, P_INNOVATION_RATING),
    }
}

pub fn decode_content(rec: &RawMetricRecord) -> ContentData {
    ContentData {
        published_posts: num(rec, P_PUBLISHED_POSTS),
        total_views: num(rec, P_TOTAL_VIEWS),
        total_engagement: num(rec, P_TOTAL_ENGAGEMENT),
        new_followers: num(rec, P_NEW_FOLLOWERS),
        content_quality: num(rec, P_CONTENT_QUALITY),
        creation_minutes: num(rec, P_CREATION_MINUTES),
        ideas_converted: num(rec, P_IDEAS_CONVERTED),
        ideas_captured: num(rec, P_IDEAS_CAPTURED),
        professional_rating: num(rec, P_PROFESSIONAL_RATING),
        innovation_rating: num(rec, P_INNOVATION_RATING),
        revenue_contribution: num(rec, P_REVENUE),
    }
}

pub fn decode_focus(rec: &RawMetricRecord) -> FocusData {
    FocusData {
        flow_hours: num(rec, P_FLOW_HOURS),
        flow_sessions: num(rec, P_FLOW_SESSIONS),
        flow_quality: num(rec, P_FLOW_QUALITY),
        screen_hours: num(rec, P_SCREEN_HOURS),
        productive_hours: num(rec, P_PRODUCTIVE_HOURS),
        entertainment_hours: num(rec, P_ENTERTAINMENT_HOURS),
        notifications: num(rec, P_NOTIFICATIONS),
        phone_free_hours: num(rec, P_PHONE_FREE_HOURS),
        pomodoros_done: num(rec, P_POMODOROS),
        task_switches: num(rec, P_TASK_SWITCHES),
    }
}

/// Decode the most recent record of a sequence; an empty sequence
/// decodes to the category's defaults.
pub fn decode_latest_health(records: &[RawMetricRecord]) -> HealthData {
    records.first().map(decode_health).unwrap_or_default()
}

pub fn decode_latest_cognitive(records: &[RawMetricRecord]) -> CognitiveData {
    records.first().map(decode_cognitive).unwrap_or_default()
}

pub fn decode_latest_content(records: &[RawMetricRecord]) -> ContentData {
    records.first().map(decode_content).unwrap_or_default()
}

pub fn decode_latest_focus(records: &[RawMetricRecord]) -> FocusData {
    records.first().map(decode_focus).unwrap_or_default()
}

/// Store property names that carry a category's date sort key. The
/// query layer sorts on this so the head of the result is the latest.
pub fn date_property(_category: Category) -> &'static str {
    "日期"
}
