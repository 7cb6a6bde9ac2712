//! 固定选项表
//!
//! 技能与区域是封闭枚举：档案分类与列表筛选共用同一组标签。
//! `value` 是发给服务端的不透明标签，`label` 仅用于展示。

/// 单个筛选选项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const SKILL_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "plumbing", label: "Plumbing" },
    FilterOption { value: "electrical", label: "Electrical" },
    FilterOption { value: "carpentry", label: "Carpentry" },
    FilterOption { value: "masonry", label: "Masonry" },
    FilterOption { value: "painting", label: "Painting" },
    FilterOption { value: "welding", label: "Welding" },
    FilterOption { value: "cleaning", label: "Cleaning" },
    FilterOption { value: "driving", label: "Driving" },
];

pub const AREA_OPTIONS: &[FilterOption] = &[
    FilterOption { value: "downtown", label: "Downtown" },
    FilterOption { value: "old-city", label: "Old City" },
    FilterOption { value: "industrial-area", label: "Industrial Area" },
    FilterOption { value: "suburbs-north", label: "North Suburbs" },
    FilterOption { value: "suburbs-south", label: "South Suburbs" },
    FilterOption { value: "riverside", label: "Riverside" },
    FilterOption { value: "airport-road", label: "Airport Road" },
];

fn label_in(options: &'static [FilterOption], value: &str) -> Option<&'static str> {
    options.iter().find(|opt| opt.value == value).map(|opt| opt.label)
}

/// 技能标签的展示名；未知标签原样返回
pub fn skill_label(value: &str) -> &str {
    label_in(SKILL_OPTIONS, value).unwrap_or(value)
}

/// 区域标签的展示名；未知标签原样返回
pub fn area_label(value: &str) -> &str {
    label_in(AREA_OPTIONS, value).unwrap_or(value)
}

/// value 是否属于技能选项表
pub fn is_skill(value: &str) -> bool {
    label_in(SKILL_OPTIONS, value).is_some()
}

/// value 是否属于区域选项表
pub fn is_area(value: &str) -> bool {
    label_in(AREA_OPTIONS, value).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn option_values_are_unique_and_non_empty() {
        for options in [SKILL_OPTIONS, AREA_OPTIONS] {
            let values: HashSet<_> = options.iter().map(|opt| opt.value).collect();
            assert_eq!(values.len(), options.len());
            assert!(options.iter().all(|opt| !opt.value.is_empty() && !opt.label.is_empty()));
        }
    }

    #[test]
    fn known_tags_resolve_to_labels() {
        assert_eq!(skill_label("plumbing"), "Plumbing");
        assert_eq!(area_label("downtown"), "Downtown");
    }

    #[test]
    fn unknown_tags_fall_back_to_raw_value() {
        // 服务端可能返回不在本地表中的历史标签
        assert_eq!(skill_label("thatching"), "thatching");
        assert_eq!(area_label("ring-road"), "ring-road");
    }

    #[test]
    fn membership_checks_reject_empty_and_unknown() {
        assert!(is_skill("welding"));
        assert!(is_area("riverside"));
        assert!(!is_skill(""));
        assert!(!is_area(""));
        assert!(!is_skill("downtown"));
        assert!(!is_area("plumbing"));
    }
}
