#[doc = "update 호출 한 번이 누적기 상태에 어떤 영향을 줬는지 나타내는 결과 값"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDisposition {
    /* 첫 응답으로 양방향 차트를 생성한 경우 */
    Initialized,
    /* 이미 생성된 차트에 시리즈를 추가 적재한 경우 */
    Loaded,
    /* 응답이 없어서 슬롯만 소비한 경우 (카운터만 증가) */
    EmptySlot,
}
