use hotaru_common::BulbPayload;

pub fn encode(on: bool) -> BulbPayload {
    BulbPayload { state: Some(on.into()), ..Default::default() }
}

pub fn decode(payload: &BulbPayload) -> Option<bool> {
    payload.state.map(|state| state.is_on())
}
