//! Reply construction in wire format using `hickory-proto`.

use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{Name, RData, Record};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use registry_resolve_domain::{AnswerRecord, DomainError};
use std::str::FromStr;

pub struct ResponseBuilder;

impl ResponseBuilder {
    /// NOERROR reply carrying `answers`, echoing the request's question.
    pub fn answer(request: &Message, answers: &[AnswerRecord]) -> Result<Vec<u8>, DomainError> {
        let mut response = Self::reply_to(request, ResponseCode::NoError);
        for answer in answers {
            response.add_answer(Self::to_record(answer)?);
        }
        Self::serialize_message(&response)
    }

    /// Empty reply with the given response code.
    pub fn error(request: &Message, code: ResponseCode) -> Result<Vec<u8>, DomainError> {
        Self::serialize_message(&Self::reply_to(request, code))
    }

    pub fn to_record(answer: &AnswerRecord) -> Result<Record, DomainError> {
        let name = Name::from_str(&answer.name).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Invalid owner name '{}': {}", answer.name, e))
        })?;
        Ok(Record::from_rdata(name, answer.ttl, RData::A(A(answer.address))))
    }

    fn reply_to(request: &Message, code: ResponseCode) -> Message {
        let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
        response.set_recursion_desired(request.recursion_desired());
        response.set_recursion_available(true);
        response.set_response_code(code);
        for query in request.queries() {
            response.add_query(query.clone());
        }
        response
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
