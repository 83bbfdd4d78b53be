#[doc = "이메일 활동량 방향 (수신/발신). 방향별로 독립적인 차트와 시리즈 장부를 가진다."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityDirection {
    Inbound,
    Outbound,
}

impl ActivityDirection {
    pub const ALL: [ActivityDirection; 2] =
        [ActivityDirection::Inbound, ActivityDirection::Outbound];

    #[doc = "방향별 차트가 바인딩되는 출력 파일 이름"]
    pub fn chart_file_name(&self) -> &'static str {
        match self {
            ActivityDirection::Inbound => "inbound_activities.png",
            ActivityDirection::Outbound => "outbound_activities.png",
        }
    }

    pub fn chart_title(&self) -> &'static str {
        match self {
            ActivityDirection::Inbound => "Inbound Email Activities",
            ActivityDirection::Outbound => "Outbound Email Activities",
        }
    }
}
